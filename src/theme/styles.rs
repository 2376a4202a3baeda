//! Global CSS styles for Tripmate.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SAND (Backgrounds) */
  --sand: #faf6ef;
  --sand-dark: #efe6d6;
  --card: #ffffff;

  /* OCEAN (Primary accent, links, focus) */
  --ocean: #0f766e;
  --ocean-light: #14b8a6;
  --ocean-glow: rgba(20, 184, 166, 0.25);

  /* SUNSET (Selected state, highlights) */
  --sunset: #f97316;
  --sunset-soft: #ffedd5;

  /* TEXT */
  --text-primary: #1f2937;
  --text-secondary: #4b5563;
  --text-muted: #9ca3af;

  /* SEMANTIC */
  --danger: #dc2626;
  --warning: #d97706;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --font-display: 'Playfair Display', Georgia, serif;

  --radius: 10px;
  --shadow: 0 4px 16px rgba(31, 41, 55, 0.08);
}

* { box-sizing: border-box; }

body {
  margin: 0;
  background: var(--sand);
  color: var(--text-primary);
  font-family: var(--font-sans);
  line-height: 1.5;
}

/* === Navigation === */
.nav-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem 2rem;
  background: var(--card);
  box-shadow: var(--shadow);
}

.nav-title {
  font-family: var(--font-display);
  font-size: 1.5rem;
  color: var(--ocean);
  text-decoration: none;
}

.nav-links { display: flex; gap: 1.5rem; }

.nav-link {
  color: var(--text-secondary);
  text-decoration: none;
  padding-bottom: 2px;
  border-bottom: 2px solid transparent;
}

.nav-link.active,
.nav-link:hover {
  color: var(--ocean);
  border-bottom-color: var(--ocean-light);
}

.section-title {
  font-family: var(--font-display);
  font-size: 1.75rem;
  margin: 0 0 1rem;
}

.section-subtitle { color: var(--text-secondary); margin-top: -0.5rem; }

/* === Forms === */
.profile-form,
.completed-profile,
.interests-content {
  max-width: 640px;
  margin: 2rem auto;
  padding: 2rem;
  background: var(--card);
  border-radius: var(--radius);
  box-shadow: var(--shadow);
}

.form-field { margin-bottom: 1.25rem; }

.input-label {
  display: block;
  font-weight: 600;
  margin-bottom: 0.35rem;
  color: var(--text-secondary);
}

.input-field {
  width: 100%;
  padding: 0.6rem 0.8rem;
  border: 1px solid var(--sand-dark);
  border-radius: 6px;
  font: inherit;
  background: var(--card);
  transition: border-color 0.15s, box-shadow 0.15s;
}

.input-field:focus {
  outline: none;
  border-color: var(--ocean-light);
  box-shadow: 0 0 0 3px var(--ocean-glow);
}

.input-field:disabled { background: var(--sand); color: var(--text-muted); }

.has-error,
.input-field.has-error { border-color: var(--danger); }

.error-message {
  color: var(--danger);
  font-size: 12px;
  margin-top: 0.25rem;
}

.advisory-message {
  color: var(--warning);
  font-size: 12px;
  margin-top: 0.25rem;
}

.preference-group {
  border: 1px solid var(--sand-dark);
  border-radius: 6px;
  padding: 0.75rem 1rem;
  margin: 0 0 1.25rem;
}

.radio-option { display: inline-flex; align-items: center; gap: 0.35rem; margin-right: 1.25rem; }

/* === Photo === */
.profile-pic {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.75rem;
  margin-bottom: 1.5rem;
}

.profile-pic-preview,
.completed-photo {
  width: 120px;
  height: 120px;
  border-radius: 50%;
  object-fit: cover;
  border: 3px solid var(--ocean-light);
}

.profile-pic-placeholder {
  width: 120px;
  height: 120px;
  border-radius: 50%;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--sand-dark);
  color: var(--text-muted);
}

.profile-pic-button { cursor: pointer; color: var(--ocean); font-weight: 600; }
.profile-pic-button input[type="file"] { display: none; }

/* === Tags === */
.tag-input { display: flex; gap: 0.5rem; }
.tag-list { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-top: 0.5rem; }

.tag,
.language-tag {
  display: inline-flex;
  align-items: center;
  gap: 0.35rem;
  padding: 0.25rem 0.65rem;
  border-radius: 999px;
  background: var(--ocean-glow);
  color: var(--ocean);
}

.tag-remove {
  border: none;
  background: none;
  cursor: pointer;
  color: inherit;
  font-size: 1rem;
  line-height: 1;
}

/* === Pills === */
.toggle-pills { display: flex; flex-wrap: wrap; gap: 0.75rem; margin: 1.5rem 0; }

.pill {
  padding: 0.5rem 1.1rem;
  border-radius: 999px;
  border: 1px solid var(--sand-dark);
  background: var(--card);
  cursor: pointer;
  font: inherit;
  transition: all 0.15s;
}

.pill:hover { border-color: var(--sunset); }

.pill.selected {
  background: var(--sunset-soft);
  border-color: var(--sunset);
  color: var(--sunset);
  font-weight: 600;
}

.selection-count { color: var(--text-muted); }

/* === Buttons === */
.btn-primary,
.btn-secondary,
.btn-ghost {
  padding: 0.6rem 1.4rem;
  border-radius: 6px;
  font: inherit;
  font-weight: 600;
  cursor: pointer;
  transition: background 0.15s, opacity 0.15s;
}

.btn-primary { background: var(--ocean); color: white; border: none; }
.btn-primary:hover:not(:disabled) { background: var(--ocean-light); }

.btn-secondary { background: var(--card); color: var(--ocean); border: 1px solid var(--ocean); }
.btn-ghost { background: none; border: none; color: var(--text-secondary); }

button:disabled { opacity: 0.6; cursor: not-allowed; }

/* === Completed Profile === */
.completed-profile { animation: slideIn 0.3s ease; text-align: center; }

.completed-details { text-align: left; margin: 1.5rem 0; }

.completed-row {
  display: flex;
  justify-content: space-between;
  padding: 0.5rem 0;
  border-bottom: 1px solid var(--sand-dark);
}

.completed-row dt { color: var(--text-muted); }
.completed-row dd { margin: 0; font-weight: 600; }

@keyframes slideIn {
  from { opacity: 0; transform: translateY(12px); }
  to { opacity: 1; transform: translateY(0); }
}

/* === Plans === */
.plans-toolbar {
  display: flex;
  gap: 1rem;
  align-items: center;
  max-width: 1100px;
  margin: 2rem auto 0;
  padding: 0 1rem;
}

.search-input-wrapper { position: relative; flex: 1; }
.search-icon { position: absolute; left: 0.75rem; top: 50%; transform: translateY(-50%); }
.search-input { padding-left: 2.25rem; }

.plans-count { max-width: 1100px; margin: 1rem auto; padding: 0 1rem; color: var(--text-muted); }

.plans-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
  gap: 1.25rem;
  max-width: 1100px;
  margin: 0 auto 2rem;
  padding: 0 1rem;
}

.plan-card {
  background: var(--card);
  border-radius: var(--radius);
  box-shadow: var(--shadow);
  overflow: hidden;
}

.plan-card-image { width: 100%; height: 160px; object-fit: cover; }
.plan-card-body { padding: 1rem; }
.plan-card-title { margin: 0 0 0.5rem; font-size: 1.1rem; }
.plan-card-location { color: var(--ocean); margin: 0; }
.plan-card-dates { color: var(--text-muted); font-size: 0.85rem; margin: 0.25rem 0; }
.plan-card-description { color: var(--text-secondary); margin: 0.5rem 0 0; }

.empty-state { text-align: center; color: var(--text-muted); margin: 4rem 0; }
"#;
