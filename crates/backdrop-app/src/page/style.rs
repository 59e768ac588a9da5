//! Component stylesheet served as `backdrop://styles.css`.

/// The component library styles: navbar, dropdowns, and the showcase
/// widgets (buttons, badges, switch, checkbox, alert, progress, cards).
pub(super) const STYLESHEET: &str = r#"* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  color: #1f2430;
  min-height: 100vh;
  background-color: transparent;
  background-size: cover;
  background-position: center;
  background-attachment: fixed;
}

/* ---- Navbar ---- */

.navbar {
  position: sticky;
  top: 0;
  z-index: 10;
  padding: 0.75rem 1rem;
}

.navbar-container {
  display: flex;
  gap: 0.5rem;
  max-width: 1100px;
  margin: 0 auto;
  padding: 0.5rem;
  border-radius: 12px;
  background: rgba(255, 255, 255, 0.82);
  backdrop-filter: blur(12px);
  box-shadow: 0 4px 24px rgba(0, 0, 0, 0.12);
}

.nav-item-wrapper {
  position: relative;
}

.nav-button {
  border: none;
  background: transparent;
  font-size: 0.9rem;
  font-weight: 600;
  padding: 0.5rem 0.9rem;
  border-radius: 8px;
  cursor: pointer;
  color: inherit;
}

.nav-button:hover {
  background: rgba(0, 0, 0, 0.06);
}

.nav-item-wrapper.open > .nav-button {
  background: rgba(59, 130, 246, 0.15);
  color: #1d4ed8;
}

.dropdown-menu {
  display: none;
  position: absolute;
  top: calc(100% + 6px);
  left: 0;
  min-width: 200px;
  padding: 0.35rem;
  border-radius: 10px;
  background: rgba(255, 255, 255, 0.97);
  box-shadow: 0 8px 32px rgba(0, 0, 0, 0.18);
}

.nav-item-wrapper.open > .dropdown-menu {
  display: block;
}

.dropdown-item {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  width: 100%;
  border: none;
  background: transparent;
  text-align: left;
  font-size: 0.9rem;
  padding: 0.5rem 0.7rem;
  border-radius: 6px;
  cursor: pointer;
  color: inherit;
}

.dropdown-item:hover {
  background: rgba(0, 0, 0, 0.06);
}

.color-preview {
  width: 16px;
  height: 16px;
  border-radius: 4px;
  border: 1px solid rgba(0, 0, 0, 0.15);
  flex: none;
}

/* Checkered swatch for the free-form picker */
.color-preview-any {
  background-color: #ffffff;
  background-image:
    linear-gradient(45deg, #ccc 25%, transparent 25%),
    linear-gradient(-45deg, #ccc 25%, transparent 25%),
    linear-gradient(45deg, transparent 75%, #ccc 75%),
    linear-gradient(-45deg, transparent 75%, #ccc 75%);
  background-size: 8px 8px;
  background-position: 0 0, 0 4px, 4px -4px, -4px 0px;
}

.hidden-input {
  display: none;
}

/* ---- Showcase ---- */

.intro {
  text-align: center;
  padding: 2.5rem 1rem 1rem;
  color: #fff;
  text-shadow: 0 2px 8px rgba(0, 0, 0, 0.45);
}

.intro p {
  margin-top: 0.5rem;
  opacity: 0.9;
}

.bento-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
  gap: 1rem;
  max-width: 1100px;
  margin: 1.5rem auto 3rem;
  padding: 0 1rem;
}

.card {
  padding: 1.25rem;
  border-radius: 14px;
  background: rgba(255, 255, 255, 0.88);
  backdrop-filter: blur(10px);
  box-shadow: 0 4px 24px rgba(0, 0, 0, 0.12);
}

.card h2 {
  font-size: 1rem;
  margin-bottom: 0.9rem;
}

.row {
  display: flex;
  gap: 0.6rem;
  flex-wrap: wrap;
  align-items: center;
}

.muted {
  margin-top: 0.5rem;
  color: #666;
  font-size: 0.85rem;
}

/* Buttons */

.btn {
  border: none;
  font-size: 0.9rem;
  font-weight: 600;
  padding: 0.5rem 1rem;
  border-radius: 8px;
  cursor: pointer;
}

.btn-primary {
  background: #3b82f6;
  color: #fff;
}

.btn-primary:hover {
  background: #2563eb;
}

.btn-secondary {
  background: rgba(0, 0, 0, 0.08);
  color: inherit;
}

.btn-secondary:hover {
  background: rgba(0, 0, 0, 0.14);
}

/* Input */

.input {
  width: 100%;
  font-size: 0.9rem;
  padding: 0.55rem 0.7rem;
  border-radius: 8px;
  border: 1px solid rgba(0, 0, 0, 0.18);
  background: #fff;
}

.input:focus {
  outline: 2px solid #3b82f6;
  border-color: transparent;
}

/* Badges */

.badge {
  display: inline-block;
  font-size: 0.75rem;
  font-weight: 600;
  padding: 0.2rem 0.6rem;
  border-radius: 999px;
  background: rgba(0, 0, 0, 0.08);
}

.badge-success { background: #d1fae5; color: #047857; }
.badge-warning { background: #fef3c7; color: #b45309; }
.badge-error   { background: #fee2e2; color: #b91c1c; }
.badge-info    { background: #dbeafe; color: #1d4ed8; }

/* Switch */

.control-row {
  display: flex;
  align-items: center;
  gap: 0.6rem;
  margin-bottom: 0.8rem;
  font-size: 0.9rem;
}

.switch {
  position: relative;
  display: inline-block;
  width: 40px;
  height: 22px;
  flex: none;
}

.switch input {
  opacity: 0;
  width: 0;
  height: 0;
}

.slider {
  position: absolute;
  inset: 0;
  border-radius: 999px;
  background: rgba(0, 0, 0, 0.25);
  transition: background 0.15s ease;
}

.slider::before {
  content: '';
  position: absolute;
  top: 2px;
  left: 2px;
  width: 18px;
  height: 18px;
  border-radius: 50%;
  background: #fff;
  transition: transform 0.15s ease;
}

.switch input:checked + .slider {
  background: #3b82f6;
}

.switch input:checked + .slider::before {
  transform: translateX(18px);
}

/* Checkbox */

.checkbox {
  width: 16px;
  height: 16px;
  accent-color: #3b82f6;
}

/* Alert */

.alert {
  font-size: 0.9rem;
  padding: 0.7rem 0.9rem;
  border-radius: 8px;
  border-left: 4px solid;
}

.alert-info {
  background: #dbeafe;
  border-color: #3b82f6;
  color: #1e3a8a;
}

/* Progress */

.progress {
  height: 10px;
  border-radius: 999px;
  background: rgba(0, 0, 0, 0.1);
  overflow: hidden;
}

.progress-fill {
  width: 0%;
  height: 100%;
  border-radius: 999px;
  background: #3b82f6;
  transition: width 0.2s ease;
}
"#;
