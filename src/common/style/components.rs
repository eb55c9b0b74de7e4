pub const BASE_COMPONENTS: &str = r#"
/* Header and navigation */
.app-header {
  background: var(--surface);
  backdrop-filter: blur(10px);
  box-shadow: var(--shadow-soft);
  position: sticky;
  top: 0;
  z-index: 100;
}

.nav-container {
  display: flex;
  height: var(--header-height);
  align-items: center;
  justify-content: space-between;
  padding: 0 var(--space-lg);
}

.logo a {
  display: flex;
  align-items: center;
  gap: var(--space-sm);
  font-weight: 600;
  font-size: 1.25rem;
}

.nav-links {
  display: flex;
  gap: var(--space-sm);
}

.nav-btn {
  padding: var(--space-sm) var(--space-md);
  border-radius: var(--border-radius);
  color: var(--text-secondary);
  transition: background var(--transition-fast), color var(--transition-fast);
}

.nav-btn:hover {
  background: var(--purple-light);
  color: var(--text-primary);
}

.nav-btn.active {
  background: var(--gradient-dream);
  color: var(--text-primary);
  font-weight: 600;
}

/* Hamburger trigger, hidden on desktop */
.hamburger {
  display: none;
  flex-direction: column;
  justify-content: center;
  gap: 5px;
  width: 40px;
  height: 40px;
  border: none;
  background: transparent;
  cursor: pointer;
  z-index: 300;
}

.hamburger span {
  display: block;
  width: 24px;
  height: 3px;
  margin: 0 auto;
  border-radius: 2px;
  background: var(--text-primary);
  transition: transform var(--transition-normal), opacity var(--transition-normal);
}

.hamburger.active span:nth-child(1) {
  transform: translateY(8px) rotate(45deg);
}

.hamburger.active span:nth-child(2) {
  opacity: 0;
}

.hamburger.active span:nth-child(3) {
  transform: translateY(-8px) rotate(-45deg);
}

/* Dimming overlay behind the open panel */
.nav-overlay {
  display: none;
  position: fixed;
  inset: 0;
  background: rgba(74, 63, 94, 0.4);
  z-index: 150;
}

.nav-overlay.active {
  display: block;
}

@media (max-width: 768px) {
  .hamburger {
    display: flex;
  }

  .nav-links {
    position: fixed;
    top: 0;
    right: 0;
    height: 100vh;
    width: min(75vw, 320px);
    flex-direction: column;
    padding: calc(var(--header-height) + var(--space-lg)) var(--space-lg);
    background: var(--surface);
    box-shadow: var(--shadow-strong);
    transform: translateX(100%);
    transition: transform var(--transition-normal);
    z-index: 200;
  }

  .nav-links.active {
    transform: translateX(0);
  }
}

/* Buttons */
.btn {
  position: relative;
  overflow: hidden;
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-sm) var(--space-lg);
  border: none;
  border-radius: var(--border-radius);
  font-size: 1rem;
  cursor: pointer;
  transition: transform var(--transition-fast), box-shadow var(--transition-fast);
}

.btn:active {
  transform: translateY(1px);
}

.btn:disabled {
  opacity: 0.7;
  cursor: wait;
}

.btn-primary {
  background: var(--gradient-dream);
  color: var(--text-primary);
  box-shadow: var(--shadow-soft);
}

.btn-primary:hover {
  box-shadow: var(--shadow-strong);
}

.btn-secondary {
  background: var(--surface);
  color: var(--text-secondary);
  box-shadow: var(--shadow-soft);
}

.btn-lg {
  padding: var(--space-md) var(--space-xl);
  font-size: 1.125rem;
}

/* Hero */
.hero {
  position: relative;
  padding: var(--space-xl) 0;
  min-height: 60vh;
  display: flex;
  align-items: center;
  overflow: hidden;
}

.hero-content {
  position: relative;
  text-align: center;
  z-index: 2;
}

.hero-title {
  font-size: clamp(2.25rem, 6vw, 3.75rem);
  margin-bottom: var(--space-md);
}

.hero-subtitle {
  font-size: 1.25rem;
  color: var(--text-secondary);
  margin-bottom: var(--space-xl);
}

.hero-actions {
  display: flex;
  justify-content: center;
  gap: var(--space-lg);
  margin-bottom: var(--space-xl);
}

.hero-scroll-hint {
  color: var(--text-secondary);
  font-size: 0.875rem;
}

/* Page sections */
.page-section {
  padding: var(--space-xl) 0;
}

.page {
  padding: var(--space-xl) 0;
}

.page-title {
  font-size: 2.25rem;
  margin-bottom: var(--space-sm);
}

.page-subtitle {
  color: var(--text-secondary);
  margin-bottom: var(--space-xl);
}

.section-title {
  font-size: 1.75rem;
  margin-bottom: var(--space-lg);
}

/* Project cards */
.project-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
  gap: var(--space-lg);
}

.project-card {
  background: var(--surface);
  border-radius: var(--border-radius);
  padding: var(--space-lg);
  box-shadow: var(--shadow-soft);
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.project-title {
  margin-bottom: var(--space-sm);
}

.project-blurb {
  color: var(--text-secondary);
  margin-bottom: var(--space-md);
}

.project-tags {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-xs);
}

.tag {
  padding: var(--space-xs) var(--space-sm);
  border-radius: 999px;
  background: var(--blue-light);
  font-size: 0.75rem;
}

/* Gallery */
.gallery-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
  gap: var(--space-lg);
}

.gallery-item {
  height: 220px;
  border-radius: var(--border-radius);
  box-shadow: var(--shadow-soft);
  display: flex;
  align-items: flex-end;
  padding: var(--space-md);
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.gallery-item.tint-pink {
  background: linear-gradient(135deg, var(--pink-dream), var(--pink-light));
}

.gallery-item.tint-purple {
  background: linear-gradient(135deg, var(--purple-dream), var(--purple-light));
}

.gallery-item.tint-blue {
  background: linear-gradient(135deg, var(--blue-dream), var(--blue-light));
}

.gallery-caption {
  font-weight: 600;
}

/* Contact form */
.contact-form {
  max-width: 640px;
  background: var(--surface);
  border-radius: var(--border-radius);
  padding: var(--space-xl);
  box-shadow: var(--shadow-soft);
  display: flex;
  flex-direction: column;
  gap: var(--space-lg);
}

.form-row {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-lg);
}

.form-field {
  display: flex;
  flex-direction: column;
  gap: var(--space-xs);
}

.form-field label {
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.form-field input,
.form-field textarea {
  padding: var(--space-sm) var(--space-md);
  border: 1px solid var(--purple-light);
  border-radius: var(--border-radius);
  font: inherit;
  background: white;
}

.form-field input:focus,
.form-field textarea:focus {
  outline: none;
  border-color: var(--purple-dream);
  box-shadow: 0 0 0 3px var(--purple-light);
}

@media (max-width: 640px) {
  .form-row {
    grid-template-columns: 1fr;
  }
}

/* Footer */
.home-footer {
  padding: var(--space-xl) 0;
  text-align: center;
  color: var(--text-secondary);
}
"#;
