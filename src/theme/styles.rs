//! Global CSS styles for the portfolio.
//!
//! The `.display-toggle` and `.scroll-transform` root classes select the
//! panel layout; at or below 968px both collapse to stacked panels.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --bg: #f8fafc;
  --surface: #ffffff;
  --border: #e2e8f0;

  --indigo: #4f46e5;
  --violet: #7c3aed;
  --green: #22c55e;
  --red: #ef4444;

  --text-primary: #0f172a;
  --text-secondary: #475569;
  --text-muted: #94a3b8;

  --font-serif: 'Crimson Pro', Georgia, serif;
  --font-sans: 'Inter', system-ui, sans-serif;

  --header-height: 64px;
  --transition: 0.8s cubic-bezier(0.25, 0.46, 0.45, 0.94);
}

*, *::before, *::after { box-sizing: border-box; }

html, body {
  margin: 0;
  background: var(--bg);
  color: var(--text-primary);
  font-family: var(--font-sans);
  line-height: 1.6;
}

.portfolio.scroll-transform { overflow: hidden; height: 100vh; }

/* === Header === */
.nav-header {
  position: fixed;
  top: 0; left: 0; right: 0;
  height: var(--header-height);
  display: flex;
  align-items: center;
  gap: 1.5rem;
  padding: 0 2rem;
  background: rgba(255, 255, 255, 0.92);
  border-bottom: 1px solid var(--border);
  z-index: 100;
}

.nav-brand { font-family: var(--font-serif); font-size: 1.25rem; font-weight: 600; }
.nav-links { display: flex; gap: 0.25rem; flex: 1; }

.nav-btn {
  background: none;
  border: none;
  padding: 0.5rem 0.9rem;
  border-radius: 6px;
  color: var(--text-secondary);
  cursor: pointer;
  font: inherit;
}
.nav-btn:hover { color: var(--indigo); }
.nav-btn.active { color: var(--indigo); background: rgba(79, 70, 229, 0.08); }

.nav-status { display: flex; align-items: center; gap: 0.75rem; }
.section-number { font-variant-numeric: tabular-nums; color: var(--text-muted); }

.progress-bar {
  width: 120px;
  height: 4px;
  background: var(--border);
  border-radius: 2px;
  overflow: hidden;
}
.progress-fill {
  height: 100%;
  background: linear-gradient(90deg, var(--indigo), var(--violet));
  transition: width 0.3s ease;
}

/* === Panels === */
.horizontal-container { padding-top: var(--header-height); }

.display-toggle .panel { display: none; }
.display-toggle .panel.active {
  display: block;
  height: calc(100vh - var(--header-height));
  overflow-y: auto;
}

.scroll-transform .horizontal-container {
  display: flex;
  width: 600vw;
  height: 100vh;
  transition: transform var(--transition);
}
.scroll-transform .panel {
  width: 100vw;
  height: 100%;
  overflow-y: auto;
  flex-shrink: 0;
  transition: transform var(--transition), opacity var(--transition);
}

.panel-content { max-width: 1080px; margin: 0 auto; padding: 3rem 2rem; }
.panel-title { font-family: var(--font-serif); font-size: 2.25rem; margin: 0 0 2rem; }

.hero { min-height: 60vh; display: flex; flex-direction: column; justify-content: center; }
.hero-title { font-family: var(--font-serif); font-size: 3.5rem; margin: 0; }
.hero-subtitle { color: var(--text-secondary); font-size: 1.25rem; }

.card-grid, .blog-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
  gap: 1.5rem;
}

.research-card, .tool-card, .cv-item, .blog-post, .contact-item {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 12px;
  padding: 1.5rem;
}
.card-meta, .post-date { color: var(--text-muted); font-size: 0.85rem; }
.card-title, .post-title { margin: 0.5rem 0; }
.card-body, .post-excerpt { color: var(--text-secondary); margin: 0; }
.blog-placeholder { color: var(--text-muted); }

/* Staggered entrance; replays whenever a panel is shown again */
.panel.active .reveal { animation: reveal 0.6s ease both; }
@keyframes reveal {
  from { opacity: 0; transform: translateY(24px); }
  to { opacity: 1; transform: translateY(0); }
}

.post-tags { display: flex; flex-wrap: wrap; gap: 0.35rem; margin: 0.5rem 0; }
.tag {
  font-size: 0.75rem;
  padding: 0.15rem 0.6rem;
  border-radius: 999px;
  background: rgba(124, 58, 237, 0.1);
  color: var(--violet);
}

/* === Buttons === */
.btn-primary, .btn-secondary {
  padding: 0.6rem 1.2rem;
  border-radius: 8px;
  font: inherit;
  cursor: pointer;
}
.btn-primary { background: var(--indigo); color: white; border: none; }
.btn-secondary { background: none; color: var(--indigo); border: 1px solid var(--indigo); }
.read-more { margin-top: 1rem; }

.scroll-buttons { position: fixed; bottom: 2rem; right: 2rem; display: flex; gap: 0.5rem; z-index: 90; }
.scroll-btn {
  width: 44px; height: 44px;
  border-radius: 50%;
  border: 1px solid var(--border);
  background: var(--surface);
  color: var(--text-primary);
  cursor: pointer;
  display: flex; align-items: center; justify-content: center;
}
.scroll-btn.disabled { opacity: 0.35; cursor: default; }

.icon-btn { background: none; border: none; cursor: pointer; font-size: 1.5rem; color: inherit; }

/* === Mobile drawer === */
.mobile-nav-toggle { display: none; margin-left: auto; }
.mobile-nav-menu {
  display: none;
  position: fixed;
  top: var(--header-height); left: 0; right: 0;
  flex-direction: column;
  background: var(--surface);
  border-bottom: 1px solid var(--border);
}
.mobile-nav-menu.open { display: flex; }
.mobile-nav-item { padding: 1rem 2rem; color: var(--text-primary); text-decoration: none; }

/* === Modal === */
.modal-backdrop {
  position: fixed;
  inset: 0;
  background: rgba(15, 23, 42, 0.6);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 200;
}
.modal-content {
  position: relative;
  background: var(--surface);
  border-radius: 12px;
  max-width: 760px;
  width: calc(100% - 2rem);
  max-height: 85vh;
  overflow-y: auto;
  padding: 2.5rem;
}
.close-btn { position: absolute; top: 1rem; right: 1rem; }
.modal-title { font-family: var(--font-serif); margin-top: 0; }
.post-body h1, .post-body h2 { font-family: var(--font-serif); }

/* === Contact form === */
.contact-form { display: flex; flex-direction: column; gap: 1rem; max-width: 560px; }
.form-group { display: flex; flex-direction: column; gap: 0.35rem; }
.input-label { font-size: 0.9rem; color: var(--text-secondary); }
.input-field {
  padding: 0.6rem 0.8rem;
  border: 1px solid var(--border);
  border-radius: 8px;
  font: inherit;
}
.input-field.field-valid { border-color: var(--green); }
.input-field.field-invalid { border-color: var(--red); }
.form-message { padding: 0.75rem 1rem; border-radius: 8px; }
.form-message.success { background: rgba(34, 197, 94, 0.12); color: #15803d; }
.form-message.error { background: rgba(239, 68, 68, 0.12); color: #b91c1c; }

/* === Narrow viewports: stacked panels, in-page anchors === */
@media (max-width: 968px) {
  .nav-links, .nav-status, .scroll-buttons { display: none; }
  .mobile-nav-toggle { display: block; }

  .display-toggle .panel,
  .display-toggle .panel.active,
  .scroll-transform .panel { display: block; width: auto; height: auto; overflow: visible; transform: none !important; opacity: 1 !important; }
  .portfolio.scroll-transform { overflow: visible; height: auto; }
  .scroll-transform .horizontal-container { display: block; width: auto; height: auto; }
  .panel .reveal { animation: none; }
}
"#;
