use constcat::concat;

mod components;
mod effects;
mod variables;

pub use components::BASE_COMPONENTS;
pub use effects::EFFECT_STYLES;
pub use variables::CSS_VARIABLES;

// Full page stylesheet, bundled once and embedded by App
pub const PAGE_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  color: var(--text-primary);
  background: var(--gradient-sky);
  line-height: 1.6;
  min-height: 100vh;
}

a {
  color: var(--text-primary);
  text-decoration: none;
}

.container {
  max-width: 1080px;
  margin: 0 auto;
  padding: 0 var(--space-md);
}

.page-content {
  position: relative;
  z-index: 1;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    EFFECT_STYLES,
);
