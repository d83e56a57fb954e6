//! Global CSS styles for Sadhana.
//!
//! Saffron-on-dusk palette; the welcome modal is the only overlay.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* DUSK (Backgrounds) */
  --dusk: #18120c;
  --dusk-lighter: #221a12;
  --dusk-border: #3a2c1c;

  /* SAFFRON (Sacred, Titles, Primary actions) */
  --saffron: #f59e0b;
  --saffron-glow: rgba(245, 158, 11, 0.3);
  --marigold: #f97316;

  /* SANDSTONE (Quotes) */
  --sandstone: #fde68a;
  --sandstone-muted: rgba(253, 230, 138, 0.7);

  /* TEXT */
  --text-primary: #f5f5f5;
  --text-secondary: rgba(245, 245, 245, 0.7);
  --text-muted: rgba(245, 245, 245, 0.5);

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-sans: 'Inter', 'Segoe UI', sans-serif;

  /* Type Scale */
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-3xl: 3rem;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  background: var(--dusk);
  color: var(--text-primary);
  line-height: 1.7;
  min-height: 100vh;
}

/* === Typography === */
.page-title {
  font-family: var(--font-serif);
  font-size: var(--text-3xl);
  font-weight: 400;
  color: var(--saffron);
  text-shadow: 0 0 30px var(--saffron-glow);
  letter-spacing: 0.1em;
}

.tagline {
  font-family: var(--font-serif);
  font-style: italic;
  color: var(--text-secondary);
}

.body-text {
  font-size: var(--text-base);
  color: var(--text-primary);
}

.sacred-term {
  color: var(--saffron);
  font-style: italic;
}

/* === Home === */
.home {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 2rem;
  padding: 4rem 2rem;
  text-align: center;
}

.home-status {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
}

/* === Buttons === */
.btn-primary {
  padding: 0.75rem 2rem;
  background: transparent;
  border: 1px solid var(--saffron);
  border-radius: 4px;
  color: var(--text-primary);
  font-size: var(--text-base);
  cursor: pointer;
  transition: all 0.3s ease;
}

.btn-primary:hover {
  box-shadow: 0 0 20px var(--saffron-glow);
  transform: translateY(-1px);
}

.btn-sacred {
  padding: 0.6rem 2rem;
  background: linear-gradient(90deg, var(--saffron), var(--marigold));
  border: none;
  border-radius: 6px;
  color: #fff;
  font-size: var(--text-base);
  box-shadow: 0 6px 18px rgba(0, 0, 0, 0.35);
  cursor: pointer;
  transition: all 300ms ease;
}

.btn-sacred:hover {
  box-shadow: 0 8px 28px var(--saffron-glow);
}

.btn-ghost {
  background: transparent;
  border: none;
  color: var(--text-secondary);
  cursor: pointer;
}

.icon-btn {
  background: transparent;
  border: none;
  cursor: pointer;
}

/* === Welcome Modal === */
.modal-overlay {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  bottom: 0;
  background: rgba(0, 0, 0, 0.75);
  backdrop-filter: blur(6px);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 1000;
  animation: fade-in 300ms ease-out;
}

.welcome-modal {
  position: relative;
  background: rgba(24, 18, 12, 0.95);
  border: 1px solid rgba(245, 158, 11, 0.5);
  border-radius: 12px;
  padding: 40px 32px 32px;
  max-width: 28rem;
  width: 90%;
  box-shadow: 0 0 40px var(--saffron-glow);
  animation: modal-appear 300ms ease-out;
}

.modal-close-btn {
  position: absolute;
  top: 16px;
  right: 16px;
  color: var(--text-muted);
  font-size: 28px;
  line-height: 1;
  width: 40px;
  height: 40px;
  border-radius: 50%;
  display: flex;
  align-items: center;
  justify-content: center;
  transition: all 300ms ease;
  z-index: 10;
}

.modal-close-btn:hover {
  background: rgba(245, 158, 11, 0.2);
  color: var(--saffron);
}

.welcome-header {
  display: flex;
  flex-direction: column;
  align-items: center;
  text-align: center;
}

.avatar-card {
  width: 5rem;
  height: 5rem;
  display: flex;
  align-items: center;
  justify-content: center;
  margin-bottom: 1rem;
  border: 1px solid rgba(245, 158, 11, 0.5);
  border-radius: 16px;
  background: linear-gradient(135deg, rgba(245, 158, 11, 0.2), rgba(249, 115, 22, 0.2));
}

.avatar-glyph {
  font-size: 2.25rem;
}

.modal-title {
  font-family: var(--font-serif);
  font-size: 28px;
  color: var(--saffron);
  text-align: center;
}

.welcome-title {
  font-weight: 700;
  background: linear-gradient(90deg, var(--saffron), var(--marigold));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.welcome-body {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  margin-top: 0.5rem;
}

.quote-card {
  padding: 1rem;
  border: 1px solid rgba(245, 158, 11, 0.4);
  border-radius: 10px;
  background: linear-gradient(90deg, rgba(120, 53, 15, 0.2), rgba(124, 45, 18, 0.2));
  text-align: center;
}

.quote-english {
  font-size: var(--text-lg);
  font-style: italic;
  color: var(--sandstone);
  margin-bottom: 0.5rem;
}

.quote-hindi {
  font-size: var(--text-sm);
  color: var(--sandstone-muted);
}

.welcome-blessing {
  font-size: var(--text-sm);
  color: var(--text-secondary);
  text-align: center;
}

.modal-actions {
  display: flex;
  justify-content: center;
  margin-top: 24px;
}

@keyframes modal-appear {
  from {
    opacity: 0;
    transform: scale(0.95) translateY(-20px);
  }
  to {
    opacity: 1;
    transform: scale(1) translateY(0);
  }
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}
"#;
