pub const CSS_VARIABLES: &str = r#"
:root {
  /* Dream palette */
  --pink-dream: #ffcfe5;
  --pink-light: #ffe4f1;
  --purple-dream: #e6d1ff;
  --purple-light: #f0e6ff;
  --blue-dream: #d1eaff;
  --blue-light: #e6f4ff;
  --accent-dream: #f0d9ff;

  /* Text */
  --text-primary: #4a3f5e;
  --text-secondary: #7a6f8f;
  --text-inverse: #ffffff;

  /* Surfaces */
  --surface: rgba(255, 255, 255, 0.85);
  --gradient-dream: linear-gradient(135deg, var(--pink-dream), var(--purple-dream), var(--blue-dream));
  --gradient-sky: linear-gradient(180deg, #fdf4fb 0%, #f3ecfe 50%, #ecf5ff 100%);
  --error: #ff6b6b;

  /* Spacing */
  --space-xs: 0.25rem;
  --space-sm: 0.5rem;
  --space-md: 1rem;
  --space-lg: 1.5rem;
  --space-xl: 2.5rem;

  /* Shape and depth */
  --border-radius: 16px;
  --shadow-soft: 0 4px 16px rgba(122, 111, 143, 0.15);
  --shadow-strong: 0 12px 32px rgba(122, 111, 143, 0.3);

  /* Layout */
  --header-height: 64px;

  /* Motion */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}
"#;
