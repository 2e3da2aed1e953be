//! Global CSS for the CozyUI showcase.
//!
//! The palette, shadows and radius arrive as CSS custom properties rendered
//! by `ThemeConfig::css_variables()`; every rule here refers to the
//! variables, so a `--theme` file reskins the page wholesale. The `.dark`
//! marker on the root element swaps the color set.

pub const GLOBAL_STYLES: &str = r#"
/* === Fonts & Motion === */
:root {
  --font-hand: 'Patrick Hand', 'Comic Sans MS', 'Segoe Print', cursive;
  --font-body: 'Nunito', 'Segoe UI', sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  --transition-colors: background-color 300ms ease, color 300ms ease, border-color 300ms ease;
  --transition-lift: transform 200ms ease, box-shadow 200ms ease;
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
  scroll-behavior: smooth;
}

body {
  min-height: 100vh;
}

.cozy-root {
  min-height: 100vh;
  padding-bottom: 5rem;
  background: var(--color-paper);
  color: var(--color-ink);
  font-family: var(--font-body);
  line-height: 1.5;
  transition: var(--transition-colors);
}

.cozy-root ::selection {
  background: var(--color-primary);
  color: #FFFFFF;
}

/* === Typography === */
h1, h2, h3, h4 {
  font-family: var(--font-hand);
  font-weight: 400;
  color: var(--color-ink);
  line-height: 1.2;
}

h1 { font-size: 3rem; }
h2 { font-size: 2.25rem; }
h3 { font-size: 1.875rem; }
h4 { font-size: 1.5rem; }

a {
  color: inherit;
  text-decoration: none;
}

/* === Navbar === */
.navbar {
  position: sticky;
  top: 0;
  z-index: 50;
  width: 100%;
  border-bottom: 1px solid var(--color-line);
  background: color-mix(in srgb, var(--color-surface) 80%, transparent);
  backdrop-filter: blur(4px);
  transition: var(--transition-colors);
}

.navbar-inner {
  max-width: 80rem;
  margin: 0 auto;
  padding: 0 1.5rem;
  height: 5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.navbar-brand {
  display: inline-block;
  font-family: var(--font-hand);
  font-size: 1.875rem;
  font-weight: 700;
  color: var(--color-primary);
  letter-spacing: 0.025em;
  transition: transform 200ms ease;
}

.navbar-brand:hover {
  transform: rotate(2deg);
}

.navbar-links {
  display: flex;
  align-items: center;
  gap: 1.25rem;
  font-family: var(--font-hand);
  font-size: 1.25rem;
}

.navbar-link {
  transition: color 200ms ease;
}

.navbar-link:hover {
  color: var(--color-primary);
}

.navbar-actions {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.theme-toggle {
  font-size: 1.375rem;
}

/* Scoped to outrank the variant fill */
.navbar .btn-download {
  background: var(--color-ink);
  border-color: var(--color-ink);
  color: var(--color-paper);
}

.navbar .btn-download:hover {
  background: var(--color-primary);
  border-color: var(--color-primary);
  color: #FFFFFF;
}

/* === Page Layout === */
.showcase-main {
  max-width: 64rem;
  margin: 0 auto;
  padding: 3rem 1.5rem 0;
  display: flex;
  flex-direction: column;
  gap: 6rem;
}

.showcase-section {
  scroll-margin-top: 7rem;
  display: flex;
  flex-direction: column;
  gap: 2rem;
}

.section-divider {
  border: none;
  border-top: 2px dashed var(--color-line);
}

.section-heading {
  display: flex;
  align-items: baseline;
  gap: 1rem;
}

.section-title {
  font-size: 2.25rem;
}

.section-tag {
  font-family: var(--font-hand);
  font-size: 1.25rem;
  color: var(--color-sub);
}

.two-col {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 2rem;
}

.three-col {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 1.5rem;
  align-items: stretch;
}

/* === Hero === */
.hero {
  padding-top: 2.5rem;
  text-align: center;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 2rem;
}

.hero-badge {
  display: inline-block;
  padding: 0.25rem 1rem;
  border-radius: 9999px;
  background: color-mix(in srgb, var(--color-secondary) 20%, transparent);
  border: 1px solid color-mix(in srgb, var(--color-secondary) 30%, transparent);
  color: var(--color-secondary);
  font-family: var(--font-hand);
  font-size: 1.125rem;
  font-weight: 700;
  transform: rotate(-2deg);
}

.hero-title {
  font-size: 4.5rem;
  line-height: 1.1;
  margin-top: 1rem;
}

.hero-accent {
  color: var(--color-primary);
  text-decoration: underline wavy;
  text-decoration-thickness: 2px;
  text-underline-offset: 8px;
}

.hero-subtitle {
  font-size: 1.25rem;
  color: var(--color-sub);
  max-width: 42rem;
  line-height: 1.7;
}

.hero-actions {
  display: flex;
  justify-content: center;
  gap: 1rem;
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  white-space: nowrap;
  border: 2px solid transparent;
  border-radius: var(--radius-cozy);
  font-family: var(--font-hand);
  font-size: 1.25rem;
  cursor: pointer;
  transition: all 300ms ease;
}

.btn:focus-visible {
  outline: 2px solid var(--color-ink);
  outline-offset: 2px;
}

.btn:disabled {
  pointer-events: none;
  opacity: 0.5;
}

.btn-md { height: 3rem; padding: 0.75rem 1.5rem; }
.btn-sm { height: 2.5rem; padding: 0 1rem; font-size: 1.125rem; border-radius: 0.75rem; }
.btn-lg { height: 3.5rem; padding: 0 2rem; font-size: 1.5rem; }
.btn-icon { height: 3rem; width: 3rem; padding: 0; }

.btn-primary {
  background: var(--color-primary);
  color: #FFFFFF;
  border-color: var(--color-ink);
  box-shadow: var(--shadow-hard);
}

.btn-secondary {
  background: var(--color-secondary);
  color: #FFFFFF;
  border-color: var(--color-ink);
  box-shadow: var(--shadow-hard);
}

.btn-outline {
  background: var(--color-surface);
  color: var(--color-ink);
  border-color: var(--color-ink);
  box-shadow: var(--shadow-hard);
}

.btn-primary:hover, .btn-secondary:hover, .btn-outline:hover {
  transform: translateY(-2px);
  box-shadow: var(--shadow-hard-hover);
}

.btn-primary:active, .btn-secondary:active, .btn-outline:active {
  transform: translateY(1px);
  box-shadow: none;
}

.btn-outline:hover {
  background: var(--color-paper);
}

.btn-ghost {
  background: transparent;
  color: var(--color-ink);
}

.btn-ghost:hover {
  background: color-mix(in srgb, var(--color-primary) 10%, transparent);
  color: var(--color-primary);
}

.btn-link {
  background: transparent;
  color: var(--color-sub);
  text-decoration: underline dashed;
  text-decoration-thickness: 2px;
  text-underline-offset: 4px;
}

.btn-link:hover {
  color: var(--color-ink);
}

.btn-soft {
  background: color-mix(in srgb, var(--color-primary) 10%, transparent);
  color: var(--color-primary);
}

.btn-soft:hover {
  background: var(--color-primary);
  color: #FFFFFF;
}

.btn-soft-secondary {
  background: color-mix(in srgb, var(--color-secondary) 10%, transparent);
  color: var(--color-secondary);
}

.btn-soft-secondary:hover {
  background: var(--color-secondary);
  color: #FFFFFF;
}

.btn-block {
  width: 100%;
}

.btn-spinner {
  width: 1.125rem;
  height: 1.125rem;
  border: 3px solid rgba(255, 255, 255, 0.4);
  border-top-color: #FFFFFF;
  border-radius: 50%;
  animation: spin 800ms linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2.75rem;
  height: 2.75rem;
  border: none;
  border-radius: 0.75rem;
  background: transparent;
  color: var(--color-ink);
  cursor: pointer;
  transition: var(--transition-colors);
}

.icon-btn:hover {
  background: color-mix(in srgb, var(--color-primary) 10%, transparent);
  color: var(--color-primary);
}

.close-btn {
  position: absolute;
  top: 0.75rem;
  right: 0.75rem;
  font-size: 1.5rem;
  color: var(--color-sub);
}

.close-btn:hover {
  color: var(--color-ink);
  background: transparent;
}

/* === Cards === */
.card {
  background: var(--color-surface);
  border: 1px solid var(--color-line);
  border-radius: var(--radius-cozy);
  box-shadow: var(--shadow-soft);
  transition: var(--transition-colors);
}

.card-header {
  padding: 1.5rem 1.5rem 0.5rem;
}

.card-title {
  font-family: var(--font-hand);
  font-size: 1.5rem;
  color: var(--color-ink);
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.card-description {
  color: var(--color-sub);
  font-size: 0.875rem;
  margin-top: 0.25rem;
}

.card-content {
  padding: 1.5rem;
}

.card-footer {
  display: flex;
  gap: 0.75rem;
  padding: 0 1.5rem 1.5rem;
}

.button-panel {
  padding: 2rem;
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.panel-title {
  font-size: 1.5rem;
  color: var(--color-sub);
  text-align: center;
}

.button-stack {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

/* Blog teaser card */
.blog-card {
  overflow: hidden;
  cursor: pointer;
  display: flex;
  flex-direction: column;
}

.blog-card:hover {
  box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
}

.blog-cover {
  height: 10rem;
  background: color-mix(in srgb, var(--color-secondary) 10%, transparent);
  display: flex;
  align-items: center;
  justify-content: center;
}

.blog-cover-mark {
  font-size: 3rem;
  color: color-mix(in srgb, var(--color-secondary) 40%, transparent);
}

.blog-body {
  display: flex;
  flex-direction: column;
  flex: 1;
}

.blog-tag {
  font-size: 0.75rem;
  font-weight: 700;
  letter-spacing: 0.05em;
  text-transform: uppercase;
  color: var(--color-primary);
  margin-bottom: 0.5rem;
}

.blog-title {
  font-size: 1.5rem;
  margin-bottom: 0.5rem;
  transition: color 200ms ease;
}

.blog-card:hover .blog-title {
  color: var(--color-primary);
}

.blog-text {
  color: var(--color-sub);
  font-size: 0.875rem;
  line-height: 1.6;
  margin-bottom: 1rem;
  flex: 1;
}

.blog-more {
  font-family: var(--font-hand);
  font-size: 1.125rem;
  color: var(--color-ink);
  width: max-content;
}

.blog-card:hover .blog-more {
  text-decoration: underline wavy var(--color-primary);
}

/* Quote card */
.quote-card {
  background: #FFF8F0;
  border: 2px dashed color-mix(in srgb, var(--color-primary) 30%, transparent);
  box-shadow: none;
  padding: 2rem;
  display: flex;
  flex-direction: column;
  justify-content: center;
  text-align: center;
  position: relative;
}

.dark .quote-card {
  background: #2e2a27;
}

.quote-mark {
  position: absolute;
  top: 0.5rem;
  left: 1rem;
  font-family: var(--font-hand);
  font-size: 3.75rem;
  color: color-mix(in srgb, var(--color-primary) 20%, transparent);
}

.quote-text {
  position: relative;
  z-index: 1;
  font-family: var(--font-hand);
  font-size: 1.5rem;
  color: var(--color-ink);
  line-height: 1.375;
  margin-top: 0.5rem;
}

.quote-author {
  margin-top: 1rem;
  font-size: 0.875rem;
  font-weight: 700;
  color: var(--color-sub);
}

/* Task list card */
.task-list {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.task-item {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.task-done {
  opacity: 0.5;
}

.task-done .task-text {
  color: var(--color-sub);
  text-decoration: line-through;
}

.task-box {
  flex: none;
  width: 1.5rem;
  height: 1.5rem;
  border: 2px solid var(--color-sub);
  border-radius: 0.375rem;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 0.875rem;
  cursor: pointer;
  transition: border-color 200ms ease;
}

.task-item:not(.task-done) .task-box:hover {
  border-color: var(--color-primary);
}

.task-box-checked {
  border-color: var(--color-secondary);
  background: var(--color-secondary);
  color: #FFFFFF;
}

/* === Typography Section === */
.type-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 2rem;
  align-items: center;
  padding-top: 0.5rem;
}

.type-samples {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.font-panel {
  background: var(--color-paper);
  border: 1px solid var(--color-line);
  border-radius: 0.75rem;
  padding: 1.5rem;
  transition: var(--transition-colors);
}

.font-name-hand {
  font-family: var(--font-hand);
  font-size: 1.5rem;
  color: var(--color-primary);
  margin-bottom: 0.5rem;
}

.font-name-body {
  font-weight: 700;
  font-size: 1.125rem;
  color: var(--color-ink);
  margin-top: 1rem;
  margin-bottom: 0.5rem;
}

.font-note {
  color: var(--color-sub);
  line-height: 1.7;
}

/* === Form Fields === */
.label {
  display: block;
  font-family: var(--font-hand);
  font-size: 1.125rem;
  color: var(--color-ink);
  cursor: pointer;
}

.label-error {
  color: var(--color-destructive);
}

.input {
  display: block;
  width: 100%;
  height: 3rem;
  padding: 0.75rem 1rem;
  border: 2px solid var(--color-line);
  border-radius: 0.75rem;
  background: var(--color-paper);
  font-family: var(--font-body);
  font-size: 1rem;
  color: var(--color-ink);
  transition: all 300ms ease;
}

.input::placeholder {
  color: color-mix(in srgb, var(--color-sub) 50%, transparent);
}

.input:focus-visible {
  outline: none;
  border-color: var(--color-primary);
  background: var(--color-surface);
}

.input:disabled {
  cursor: not-allowed;
  opacity: 0.5;
}

.input-error {
  border-color: var(--color-destructive);
}

.input-error:focus-visible {
  border-color: var(--color-destructive);
}

.textarea {
  height: auto;
  min-height: 5rem;
  resize: none;
}

.select-wrapper {
  position: relative;
  width: 100%;
}

.select {
  appearance: none;
  padding-right: 2.5rem;
  cursor: pointer;
}

.select-chevron {
  position: absolute;
  right: 1rem;
  top: 50%;
  transform: translateY(-50%);
  color: var(--color-sub);
  pointer-events: none;
}

.checkbox-wrapper {
  position: relative;
  display: inline-flex;
  align-items: center;
}

.checkbox-input {
  appearance: none;
  width: 1.5rem;
  height: 1.5rem;
  border: 2px solid var(--color-sub);
  border-radius: 0.375rem;
  cursor: pointer;
  transition: all 200ms ease;
}

.checkbox-input:checked {
  border-color: var(--color-primary);
  background: var(--color-primary);
}

.checkbox-input:focus-visible {
  outline: 2px solid color-mix(in srgb, var(--color-primary) 40%, transparent);
  outline-offset: 2px;
}

.checkbox-check {
  position: absolute;
  left: 50%;
  top: 50%;
  transform: translate(-50%, -50%);
  color: #FFFFFF;
  font-size: 0.875rem;
  opacity: 0;
  pointer-events: none;
  transition: opacity 200ms ease;
}

.checkbox-input:checked + .checkbox-check {
  opacity: 1;
}

.field-panel {
  padding: 2rem;
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.field {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.field-hint-error {
  font-size: 0.875rem;
  font-weight: 700;
  color: var(--color-destructive);
}

.check-row {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding-top: 0.5rem;
}

/* === Dialog === */
.popup-teaser {
  background: var(--color-paper);
  border: 2px dashed var(--color-line);
  border-radius: var(--radius-cozy);
  padding: 3rem;
  text-align: center;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
  transition: var(--transition-colors);
}

.popup-bell {
  font-size: 2.5rem;
}

.popup-teaser-text {
  color: var(--color-sub);
  max-width: 28rem;
}

.dialog-overlay {
  position: fixed;
  inset: 0;
  z-index: 100;
  background: color-mix(in srgb, var(--color-ink) 40%, transparent);
  backdrop-filter: blur(4px);
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1.5rem;
  animation: fade-in 200ms ease;
}

.dark .dialog-overlay {
  background: rgba(0, 0, 0, 0.6);
}

.dialog-panel {
  position: relative;
  width: 100%;
  max-width: 32rem;
  background: var(--color-surface);
  border: 2px solid var(--color-ink);
  border-radius: var(--radius-cozy);
  box-shadow: var(--shadow-hard);
  padding: 2rem;
  animation: pop 200ms ease;
}

.dialog-header {
  padding-right: 2rem;
}

.dialog-title {
  font-size: 1.875rem;
}

.dialog-description {
  margin-top: 0.5rem;
  color: var(--color-sub);
}

.dialog-footer {
  display: flex;
  justify-content: flex-end;
  gap: 0.75rem;
  margin-top: 1.5rem;
}

.tip-box {
  margin: 1.5rem 0 0;
  background: var(--color-paper);
  border: 1px solid var(--color-line);
  border-radius: 0.75rem;
  padding: 1rem;
  color: var(--color-sub);
  font-size: 0.875rem;
  transition: var(--transition-colors);
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes pop {
  from { opacity: 0; transform: scale(0.95); }
  to { opacity: 1; transform: scale(1); }
}

/* === Market Chart === */
.market-header {
  border-bottom: 1px solid color-mix(in srgb, var(--color-line) 50%, transparent);
  padding-bottom: 1rem;
}

.market-header-row {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
}

.market-title {
  font-size: 1.5rem;
}

.market-title-icon {
  font-size: 1.25rem;
}

.market-readout {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.market-price-block {
  text-align: right;
}

.market-price {
  font-family: var(--font-hand);
  font-size: 1.5rem;
  color: var(--color-ink);
}

.market-delta {
  font-size: 0.875rem;
  font-weight: 700;
  color: var(--color-secondary);
}

.market-body {
  padding: 1.5rem 2rem 2rem;
}

.chart-frame {
  position: relative;
}

.grid-lines {
  position: absolute;
  inset: 0;
  display: flex;
  flex-direction: column;
  justify-content: space-between;
  pointer-events: none;
}

.grid-line {
  height: 0;
  border-bottom: 1px dashed var(--color-line);
}

.chart-surface {
  position: relative;
  width: 100%;
  height: 300px;
  cursor: crosshair;
}

.chart-surface-empty {
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--color-paper);
  border: 2px dashed var(--color-line);
  border-radius: var(--radius-cozy);
  cursor: default;
}

.chart-empty-note {
  font-family: var(--font-hand);
  font-size: 1.125rem;
  color: var(--color-sub);
}

.chart-svg {
  width: 100%;
  height: 100%;
  display: block;
  overflow: visible;
}

.chart-tooltip {
  position: absolute;
  z-index: 10;
  background: var(--color-ink);
  color: var(--color-paper);
  font-size: 0.875rem;
  font-weight: 700;
  white-space: nowrap;
  padding: 0.5rem 0.75rem;
  border-radius: 0.5rem;
  box-shadow: 0 10px 20px rgba(0, 0, 0, 0.15);
  pointer-events: none;
}

.x-axis {
  display: flex;
  justify-content: space-between;
  margin-top: 1rem;
  font-family: var(--font-mono);
  font-size: 0.75rem;
  color: var(--color-sub);
  text-transform: uppercase;
  letter-spacing: 0.05em;
}

/* === Bar Chart === */
.bar-chart {
  display: flex;
  align-items: flex-end;
  justify-content: space-between;
  gap: 0.5rem;
  height: 12rem;
  padding-top: 1rem;
}

.bar-col {
  flex: 1;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.5rem;
}

.bar-wrap {
  position: relative;
  width: 100%;
}

.bar {
  width: 100%;
  background: color-mix(in srgb, var(--color-primary) 20%, transparent);
  border: 2px solid var(--color-primary);
  border-radius: 0.5rem 0.5rem 0 0;
  cursor: pointer;
  transition: background 200ms ease;
}

.bar-col:hover .bar {
  background: color-mix(in srgb, var(--color-primary) 40%, transparent);
}

.bar-tooltip {
  position: absolute;
  bottom: 100%;
  left: 50%;
  transform: translateX(-50%);
  margin-bottom: 0.5rem;
  background: var(--color-ink);
  color: var(--color-paper);
  font-size: 0.75rem;
  font-weight: 700;
  white-space: nowrap;
  padding: 0.25rem 0.5rem;
  border-radius: 0.25rem;
  opacity: 0;
  pointer-events: none;
  transition: opacity 200ms ease;
}

.bar-col:hover .bar-tooltip {
  opacity: 1;
}

.bar-label {
  font-family: var(--font-hand);
  font-size: 0.875rem;
  color: var(--color-sub);
}

/* === Stat Cards === */
.stat-stack {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.stat-body {
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.stat-card-sage {
  background: color-mix(in srgb, var(--color-secondary) 10%, var(--color-surface));
  border-color: color-mix(in srgb, var(--color-secondary) 30%, transparent);
}

.stat-card-warm {
  background: #FFF8F0;
  border-color: color-mix(in srgb, var(--color-primary) 20%, transparent);
}

.dark .stat-card-warm {
  background: #2e2a27;
}

.stat-label {
  font-family: var(--font-hand);
  font-size: 1.25rem;
  color: var(--color-sub);
}

.stat-value {
  font-family: var(--font-hand);
  font-size: 3rem;
  color: var(--color-ink);
  margin-top: 0.25rem;
}

.stat-icon {
  width: 4rem;
  height: 4rem;
  border-radius: 50%;
  background: var(--color-surface);
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 1.5rem;
  transition: var(--transition-colors);
}

.stat-card-sage .stat-icon {
  border: 2px solid color-mix(in srgb, var(--color-secondary) 30%, transparent);
}

.stat-card-warm .stat-icon {
  border: 2px solid color-mix(in srgb, var(--color-primary) 20%, transparent);
}

.coming-soon {
  background: var(--color-surface);
  border: 2px dashed var(--color-line);
  border-radius: var(--radius-cozy);
  padding: 1.5rem;
  display: flex;
  align-items: center;
  justify-content: center;
  font-family: var(--font-hand);
  font-size: 1.125rem;
  font-style: italic;
  color: var(--color-sub);
  transition: var(--transition-colors);
}

/* === Contact Form === */
.form-card {
  max-width: 48rem;
  margin: 0 auto;
  width: 100%;
  overflow: hidden;
}

.form-card-header {
  background: color-mix(in srgb, var(--color-primary) 5%, transparent);
  border-bottom: 1px solid var(--color-line);
  padding: 2rem;
  text-align: center;
}

.form-card-header p {
  color: var(--color-sub);
  margin-top: 0.5rem;
}

.form-body {
  padding: 2.5rem;
}

.contact-form {
  display: flex;
  flex-direction: column;
  gap: 2rem;
}

.form-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 1.5rem;
}

.consent-box {
  display: flex;
  align-items: flex-start;
  gap: 0.75rem;
  background: var(--color-paper);
  border: 1px solid var(--color-line);
  border-radius: 0.75rem;
  padding: 1rem;
  transition: var(--transition-colors);
}

.consent-label {
  font-family: var(--font-body);
  font-size: 1rem;
}

.consent-label strong {
  color: var(--color-ink);
}

.btn-submit {
  height: auto;
  padding: 2rem;
  font-size: 1.5rem;
  box-shadow: var(--shadow-hard);
}

.btn-submit:hover {
  box-shadow: var(--shadow-hard-hover);
}

.form-success {
  text-align: center;
  padding: 3rem 0;
  animation: pop 300ms ease;
}

.success-icon {
  width: 5rem;
  height: 5rem;
  margin: 0 auto 1.5rem;
  border-radius: 50%;
  background: color-mix(in srgb, var(--color-secondary) 20%, transparent);
  color: var(--color-secondary);
  font-size: 2.5rem;
  display: flex;
  align-items: center;
  justify-content: center;
}

.form-success h4 {
  font-size: 1.875rem;
  margin-bottom: 0.5rem;
}

.form-success p {
  color: var(--color-sub);
}

/* === Images === */
.img-default {
  display: block;
  max-width: 100%;
  height: auto;
  object-fit: cover;
  border-radius: var(--radius-cozy);
  border: 1px solid var(--color-line);
  box-shadow: var(--shadow-soft);
}

.img-retro {
  display: block;
  max-width: 100%;
  height: auto;
  object-fit: cover;
  border-radius: var(--radius-cozy);
  border: 2px solid var(--color-ink);
  box-shadow: var(--shadow-hard);
  transition: var(--transition-lift);
}

.img-retro:hover {
  transform: translateY(-2px);
  box-shadow: var(--shadow-hard-hover);
}

.img-polaroid {
  display: block;
  max-width: 100%;
  position: relative;
  background: var(--color-surface);
  border: 2px solid var(--color-line);
  padding: 0.75rem 0.75rem 3rem;
  box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
  transform: rotate(2deg);
  transition: transform 300ms ease, box-shadow 300ms ease;
}

.img-polaroid:hover {
  transform: rotate(0deg) scale(1.05);
  box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
  z-index: 10;
}

.img-polaroid-photo {
  display: block;
  width: 100%;
  height: auto;
  border-radius: 0.125rem;
  border: 1px solid color-mix(in srgb, var(--color-line) 20%, transparent);
}

.img-polaroid-caption {
  position: absolute;
  left: 0;
  right: 0;
  bottom: 0.75rem;
  text-align: center;
  font-family: var(--font-hand);
  font-size: 1.25rem;
  color: var(--color-ink);
}

.img-circle {
  display: block;
  object-fit: cover;
  aspect-ratio: 1;
  border-radius: 50%;
  border: 2px solid var(--color-line);
  box-shadow: var(--shadow-soft);
}

.avatar-lg {
  width: 8rem;
  height: 8rem;
}

.image-demo {
  display: flex;
  flex-direction: column;
  align-items: flex-start;
  gap: 1rem;
}

.variant-tag {
  display: inline-block;
  padding: 0.25rem 0.5rem;
  border-radius: 0.25rem;
  font-size: 0.75rem;
  font-weight: 700;
  color: #FFFFFF;
}

.variant-tag-primary { background: var(--color-primary); }
.variant-tag-sage { background: var(--color-secondary); }
.variant-tag-ink { background: var(--color-ink); color: var(--color-paper); }
.variant-tag-sub { background: var(--color-sub); }

.image-note {
  font-family: var(--font-hand);
  font-size: 1.125rem;
  color: var(--color-sub);
}

.circle-row {
  display: flex;
  align-items: center;
  gap: 1.5rem;
  margin-top: 2rem;
}

.circle-row .image-note {
  font-family: var(--font-body);
  font-size: 0.875rem;
}

/* === Footer === */
.footer {
  margin-top: 5rem;
  background: var(--color-surface);
  border-top: 1px solid var(--color-line);
  padding: 3rem 0;
  transition: var(--transition-colors);
}

.footer-inner {
  max-width: 64rem;
  margin: 0 auto;
  padding: 0 1.5rem;
  text-align: center;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.footer-brand {
  font-size: 1.875rem;
  font-weight: 700;
  color: var(--color-primary);
}

.footer-links {
  display: flex;
  justify-content: center;
  gap: 1.5rem;
  font-family: var(--font-hand);
  font-size: 1.125rem;
  color: var(--color-sub);
}

.footer-links a:hover {
  color: var(--color-ink);
}

.footer-note {
  width: 50%;
  margin: 0 auto;
  padding-top: 1rem;
  border-top: 1px dashed var(--color-line);
  font-size: 0.875rem;
  color: var(--color-sub);
}

/* === Narrow Windows === */
@media (max-width: 900px) {
  .navbar-links { display: none; }
  .two-col, .three-col, .type-grid, .form-grid { grid-template-columns: 1fr; }
  .hero-title { font-size: 3rem; }
  .market-header-row { flex-direction: column; align-items: flex-start; }
  .market-price-block { text-align: left; }
  .footer-note { width: 100%; }
}
"#;
