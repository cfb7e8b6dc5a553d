//! Global CSS styles for ServiceDock.
//!
//! Light customer theme: white surfaces, sky primary, status tones for
//! pending (amber), ongoing (emerald), cancelled (rose) and completed (sky).

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --surface: #ffffff;
  --surface-muted: #f9fafb;
  --surface-sunken: #f3f4f6;
  --border: #e5e7eb;

  /* Primary */
  --primary: #0ea5e9;
  --primary-soft: rgba(14, 165, 233, 0.1);
  --primary-strong: #0284c7;

  /* Status tones */
  --amber: #d97706;
  --amber-soft: #fffbeb;
  --emerald: #059669;
  --emerald-soft: #ecfdf5;
  --rose: #e11d48;
  --rose-soft: #fff1f2;
  --sky: #0284c7;
  --sky-soft: #f0f9ff;

  /* Text */
  --text-primary: #111827;
  --text-secondary: #4b5563;
  --text-muted: #9ca3af;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2.25rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;

  --shadow-sm: 0 1px 2px rgba(0, 0, 0, 0.05);
  --shadow-lg: 0 10px 30px rgba(0, 0, 0, 0.12);
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
}

body {
  font-family: var(--font-sans);
  background: var(--surface-muted);
  color: var(--text-primary);
  line-height: 1.5;
  min-height: 100vh;
}

button {
  font-family: inherit;
  cursor: pointer;
}

.muted { color: var(--text-secondary); }
.hint { font-size: var(--text-sm); color: var(--text-muted); }
.empty-hint { padding: 1rem; text-align: center; color: var(--text-muted); font-size: var(--text-sm); }
.dot-separator { margin: 0 0.5rem; }

/* === Pages === */
.landing, .section-page {
  max-width: 1200px;
  margin: 0 auto;
  padding: 3rem 2rem 8rem;
}

.landing-header {
  text-align: center;
  margin-bottom: 3rem;
}

.page-title {
  font-size: var(--text-2xl);
  font-weight: 700;
  letter-spacing: -0.02em;
}

.tagline {
  margin-top: 0.75rem;
  color: var(--text-secondary);
  font-size: var(--text-lg);
}

.section-page .btn-secondary { margin-top: 1.5rem; }

/* === Buttons === */
.btn-primary {
  padding: 0.6rem 1.5rem;
  background: var(--primary);
  border: none;
  border-radius: 8px;
  color: #ffffff;
  font-size: var(--text-sm);
  font-weight: 600;
  transition: background var(--transition-fast);
}

.btn-primary:hover { background: var(--primary-strong); }

.btn-primary:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.btn-secondary {
  padding: 0.6rem 1.5rem;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 8px;
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

.btn-secondary:hover { background: var(--surface-sunken); }

.btn-small {
  padding: 0.4rem 1rem;
  border-radius: 8px;
  font-size: var(--text-sm);
  border: 1px solid var(--border);
  background: var(--surface);
}

.btn-cancel { color: var(--text-secondary); }
.btn-danger { background: var(--rose-soft); color: var(--rose); border-color: transparent; }

.btn-link {
  background: none;
  border: none;
  color: var(--primary);
  font-size: var(--text-xs);
}

/* === Spinner === */
.spinner {
  width: 2rem;
  height: 2rem;
  border: 3px solid var(--border);
  border-top-color: var(--primary);
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

.spinner.small {
  width: 1rem;
  height: 1rem;
  border-width: 2px;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Feature Showcase === */
.showcase {
  display: grid;
  grid-template-columns: 2fr 3fr;
  gap: 2rem;
  align-items: start;
}

.showcase-list {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.feature-card {
  display: flex;
  gap: 1rem;
  align-items: flex-start;
  text-align: left;
  padding: 1rem;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 12px;
  transition: all var(--transition-fast);
}

.feature-card:hover { box-shadow: var(--shadow-sm); }

.feature-card.active {
  border-color: var(--primary);
  background: var(--sky-soft);
}

.feature-icon { font-size: var(--text-xl); }
.feature-title { font-size: var(--text-base); font-weight: 600; }
.feature-description { font-size: var(--text-sm); color: var(--text-secondary); margin-top: 0.25rem; }

.showcase-devices {
  position: relative;
  display: flex;
  gap: 1.5rem;
  align-items: flex-end;
  justify-content: center;
  min-height: 360px;
  padding: 2rem;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 16px;
}

.showcase-loading {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(255, 255, 255, 0.8);
  border-radius: 16px;
}

.device {
  background: #111827;
  padding: 0.5rem;
  box-shadow: var(--shadow-lg);
}

.device video {
  display: block;
  width: 100%;
  border-radius: 6px;
}

.device-phone { width: 160px; border-radius: 24px; }
.device-laptop { width: 420px; border-radius: 10px; }

.showcase-caption {
  position: absolute;
  bottom: 0.75rem;
  font-size: var(--text-sm);
  color: var(--text-muted);
}

/* === Performance Strip === */
.performance-strip {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: 1rem;
  margin-top: 3rem;
}

.performance-stat {
  display: flex;
  flex-direction: column;
  align-items: center;
  padding: 1.5rem 1rem;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 12px;
}

.performance-value { font-size: var(--text-xl); font-weight: 700; color: var(--primary); }
.performance-label { font-weight: 600; }
.performance-caption { font-size: var(--text-xs); color: var(--text-muted); }

/* === Floating Dock === */
.floating-dock {
  position: fixed;
  bottom: 1.5rem;
  left: 50%;
  transform: translateX(-50%);
  display: flex;
  align-items: center;
  gap: 0.25rem;
  padding: 0.25rem 0.5rem;
  background: rgba(229, 231, 235, 0.4);
  backdrop-filter: blur(16px);
  border-radius: 9999px;
  box-shadow: var(--shadow-lg);
  z-index: 50;
}

.dock-item {
  position: relative;
  display: flex;
  align-items: center;
  justify-content: center;
  width: 2.5rem;
  height: 2.5rem;
  background: transparent;
  border: none;
  border-radius: 9999px;
  color: var(--text-secondary);
  transition: transform var(--transition-fast), color var(--transition-fast);
}

.dock-item:hover { transform: scale(1.1); color: var(--primary); }
.dock-item.active { color: var(--primary); background: var(--primary-soft); }

.dock-tooltip {
  position: absolute;
  top: -2rem;
  padding: 0.15rem 0.5rem;
  background: #38bdf8;
  color: #ffffff;
  font-size: var(--text-xs);
  border-radius: 6px;
  white-space: nowrap;
  opacity: 0;
  pointer-events: none;
  transition: opacity var(--transition-fast);
}

.dock-item:hover .dock-tooltip { opacity: 1; }

.dock-badge {
  position: absolute;
  top: 0;
  right: 0;
  min-width: 1rem;
  height: 1rem;
  padding: 0 0.25rem;
  background: var(--rose);
  color: #ffffff;
  font-size: 0.625rem;
  line-height: 1rem;
  border-radius: 9999px;
}

.dock-notifications { position: relative; }

.dock-reopen {
  position: fixed;
  bottom: 1.5rem;
  left: 50%;
  transform: translateX(-50%);
  padding: 0.75rem;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 9999px;
  color: var(--text-secondary);
  box-shadow: var(--shadow-sm);
  z-index: 50;
}

.dock-reopen-dot {
  position: absolute;
  top: 0.4rem;
  right: 0.4rem;
  width: 0.6rem;
  height: 0.6rem;
  background: var(--rose);
  border: 1px solid #ffffff;
  border-radius: 50%;
}

/* === Notification Popup === */
.notification-popup {
  position: absolute;
  bottom: 3.5rem;
  right: -10.5rem;
  width: 22rem;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 12px;
  box-shadow: var(--shadow-lg);
  overflow: hidden;
}

.notification-header {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.75rem 1rem;
  border-bottom: 1px solid var(--border);
}

.notification-header h3 { flex: 1; font-size: var(--text-base); }

.notification-list { max-height: 20rem; overflow-y: auto; }

.notification-item {
  display: flex;
  gap: 0.5rem;
  padding: 0.75rem 1rem;
  border-bottom: 1px solid var(--surface-sunken);
  cursor: pointer;
}

.notification-item.unread { background: var(--sky-soft); }
.notification-text { flex: 1; }
.notification-text h4 { font-size: var(--text-sm); }
.notification-text p { font-size: var(--text-xs); color: var(--text-secondary); }
.notification-time { font-size: 0.625rem; color: var(--text-muted); }

.notification-dismiss {
  background: none;
  border: none;
  color: var(--text-muted);
  font-size: var(--text-lg);
}

/* === Bookings Drawer === */
.drawer-backdrop {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.2);
  backdrop-filter: blur(4px);
  z-index: 30;
}

.bookings-drawer {
  position: fixed;
  top: 0;
  right: 0;
  bottom: 0;
  width: min(100%, 40rem);
  display: flex;
  flex-direction: column;
  background: var(--surface-muted);
  box-shadow: var(--shadow-lg);
  z-index: 40;
  animation: slide-in var(--transition-normal);
}

@keyframes slide-in {
  from { transform: translateX(100%); }
  to { transform: translateX(0); }
}

.drawer-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem;
  background: var(--surface);
  border-bottom: 1px solid var(--border);
}

.drawer-title h2 { font-size: var(--text-lg); font-weight: 700; }

.drawer-clock {
  display: flex;
  align-items: center;
  margin-top: 0.25rem;
  font-size: var(--text-xs);
  color: var(--text-muted);
}

.drawer-filters {
  padding: 1rem;
  background: var(--surface);
  border-bottom: 1px solid var(--border);
}

.drawer-search {
  width: 100%;
  padding: 0.5rem 1rem;
  border: 1px solid var(--border);
  border-radius: 8px;
  font-size: var(--text-sm);
}

.drawer-search:focus { outline: 2px solid var(--primary-soft); }

.drawer-tabs {
  display: flex;
  gap: 0.5rem;
  margin-top: 1rem;
  overflow-x: auto;
}

.drawer-tab {
  padding: 0.35rem 0.75rem;
  border: none;
  border-radius: 9999px;
  background: var(--surface-sunken);
  color: var(--text-secondary);
  font-size: var(--text-xs);
  font-weight: 500;
  white-space: nowrap;
}

.drawer-tab.active { color: #ffffff; background: var(--primary); }
.drawer-tab.active.pending { background: #f59e0b; }
.drawer-tab.active.ongoing { background: #10b981; }
.drawer-tab.active.cancelled { background: #f43f5e; }
.drawer-tab.active.completed { background: #0ea5e9; }

.drawer-stats {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 0.75rem;
  padding: 1rem;
}

.stat-card {
  padding: 0.75rem;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 12px;
}

.stat-title { font-size: var(--text-xs); color: var(--text-muted); }

.stat-row {
  display: flex;
  align-items: baseline;
  justify-content: space-between;
}

.stat-count { font-size: var(--text-xl); font-weight: 700; }
.trend { font-size: var(--text-xs); font-weight: 600; }
.trend.up { color: var(--emerald); }
.trend.down { color: var(--rose); }

.drawer-list {
  flex: 1;
  overflow-y: auto;
  display: flex;
  flex-direction: column;
  gap: 1rem;
  padding: 0 1rem 1rem;
}

.drawer-state {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.5rem;
  padding: 3rem 1rem;
  color: var(--text-secondary);
}

.drawer-state.error { color: var(--rose); }

.drawer-banner {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  padding: 0.5rem 0.75rem;
  background: var(--rose-soft);
  color: var(--rose);
  font-size: var(--text-xs);
  border-radius: 8px;
}

.view-more { align-self: center; }

/* === Booking Card === */
.booking-card {
  display: flex;
  background: var(--surface);
  border: 1px solid var(--surface-sunken);
  border-radius: 12px;
  overflow: hidden;
  box-shadow: var(--shadow-sm);
  transition: box-shadow var(--transition-normal);
}

.booking-card:hover { box-shadow: var(--shadow-lg); }

.booking-image { width: 33%; min-height: 150px; }

.booking-image img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.booking-body { width: 67%; padding: 1rem; }

.booking-head {
  display: flex;
  justify-content: space-between;
  align-items: flex-start;
}

.booking-company { font-size: var(--text-base); font-weight: 600; }
.booking-service { font-size: var(--text-sm); color: var(--text-secondary); }
.booking-workers { font-size: var(--text-xs); color: var(--text-muted); }

.booking-meta {
  display: flex;
  justify-content: space-between;
  margin-top: 0.75rem;
  font-size: var(--text-sm);
}

.booking-date { color: var(--text-muted); }
.booking-price { font-weight: 500; }

.btn-details {
  width: 100%;
  margin-top: 0.5rem;
  padding: 0.25rem 0.75rem;
  background: var(--surface-sunken);
  border: none;
  border-radius: 8px;
  color: var(--text-secondary);
  font-size: var(--text-xs);
}

.booking-actions {
  display: flex;
  gap: 0.5rem;
  margin-top: 1rem;
}

.booking-actions.stacked { flex-direction: column; }

.btn-action {
  flex: 1;
  padding: 0.5rem 1rem;
  border: none;
  border-radius: 8px;
  font-size: var(--text-sm);
  transition: background var(--transition-fast);
}

.btn-action.wide { width: 100%; margin-top: 1rem; }
.btn-action.again { background: var(--primary-soft); color: var(--primary); }
.btn-action.cancel { background: #ffe4e6; color: #be123c; }
.btn-action.pay, .btn-action.track { background: #d1fae5; color: #047857; }
.btn-action.complete { background: #e0f2fe; color: #0369a1; }

/* === Status Badges === */
.status-badge {
  padding: 0.2rem 0.5rem;
  border-radius: 9999px;
  font-size: var(--text-xs);
  font-weight: 500;
  white-space: nowrap;
}

.status-badge.pending { color: var(--amber); background: var(--amber-soft); }
.status-badge.ongoing { color: var(--emerald); background: var(--emerald-soft); }
.status-badge.cancelled { color: var(--rose); background: var(--rose-soft); }
.status-badge.completed { color: var(--sky); background: var(--sky-soft); }

/* === Countdown === */
.countdown {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0.35rem 0.75rem;
  border-radius: 8px;
  font-size: var(--text-sm);
}

.countdown.calm { background: var(--emerald-soft); color: #047857; }
.countdown.warning { background: var(--amber-soft); color: #b45309; }
.countdown.critical { background: var(--rose-soft); color: #be123c; }
.countdown-value { font-weight: 600; }

.waiting-provider {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  padding: 0.5rem 1rem;
  background: #e5e7eb;
  color: #374151;
  border-radius: 8px;
  font-size: var(--text-sm);
}

/* === Modal Overlay === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.5);
  backdrop-filter: blur(4px);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 1000;
  padding: 2rem;
}

.modal-content {
  background: var(--surface);
  border-radius: 16px;
  max-width: 480px;
  width: 100%;
  max-height: 90vh;
  overflow-y: auto;
  box-shadow: var(--shadow-lg);
}

.details-modal, .tracking-modal { max-width: 720px; }

.modal-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1.25rem 1.5rem;
  border-bottom: 1px solid var(--border);
}

.section-header { font-size: var(--text-lg); font-weight: 700; }

.modal-close-btn {
  background: transparent;
  border: none;
  color: var(--text-muted);
  font-size: var(--text-xl);
  padding: 0.25rem 0.5rem;
  transition: color var(--transition-fast);
}

.modal-close-btn:hover { color: var(--text-primary); }

.modal-body { padding: 1.5rem; }

.modal-footer {
  display: flex;
  justify-content: flex-end;
  gap: 0.75rem;
  padding: 1rem 1.5rem;
  border-top: 1px solid var(--border);
}

/* === Details === */
.details-provider {
  display: flex;
  align-items: center;
  gap: 1rem;
  margin-bottom: 1.5rem;
}

.details-provider > div { flex: 1; }

.details-image {
  width: 4rem;
  height: 4rem;
  object-fit: cover;
  border-radius: 12px;
}

.details-columns {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1.5rem;
}

.details-info h4, .details-summary h4 { margin-bottom: 0.75rem; font-size: var(--text-sm); }

.details-info dl {
  display: grid;
  grid-template-columns: auto 1fr;
  gap: 0.35rem 1rem;
  font-size: var(--text-sm);
}

.details-info dt { color: var(--text-muted); }

.details-summary {
  padding: 1rem;
  background: var(--surface-muted);
  border-radius: 12px;
}

.summary-row {
  display: flex;
  justify-content: space-between;
  gap: 1rem;
  padding: 0.35rem 0;
  font-size: var(--text-sm);
}

.summary-row.total {
  margin-top: 0.5rem;
  padding-top: 0.75rem;
  border-top: 1px solid var(--border);
  font-weight: 700;
}

/* === Payment === */
.seller-card {
  margin-bottom: 1.25rem;
  padding-bottom: 1rem;
  border-bottom: 1px solid var(--border);
}

.seller-rating { font-size: var(--text-sm); color: var(--text-secondary); }
.stars { color: #f59e0b; }

/* === Tracking === */
.tracking-map {
  position: relative;
  height: 220px;
  background: linear-gradient(135deg, #e0f2fe, #ecfdf5);
  border-radius: 12px;
  overflow: hidden;
}

.tracking-route {
  position: absolute;
  top: 50%;
  left: 1rem;
  right: 1rem;
  border-top: 3px dashed var(--primary);
}

.tracking-provider, .tracking-destination {
  position: absolute;
  top: 50%;
  width: 1.25rem;
  height: 1.25rem;
  margin: -0.625rem 0 0 -0.625rem;
  border-radius: 50%;
  border: 3px solid #ffffff;
  box-shadow: var(--shadow-sm);
}

.tracking-provider {
  background: var(--primary);
  transition: left 1s linear;
}

.tracking-provider.arrived { background: var(--emerald); }
.tracking-destination { left: 100%; margin-left: -1.875rem; background: var(--rose); }

.tracking-stats {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 0.75rem;
  margin-top: 1rem;
}

.tracking-stat {
  display: flex;
  flex-direction: column;
  padding: 0.75rem;
  background: var(--surface-muted);
  border-radius: 8px;
}

.tracking-note { margin-top: 1rem; font-size: var(--text-sm); color: var(--text-secondary); }
.tracking-note.arrived { color: var(--emerald); font-weight: 600; }

/* === Review === */
.star-row {
  display: flex;
  justify-content: center;
  gap: 0.5rem;
  margin-bottom: 1.25rem;
}

.star {
  background: none;
  border: none;
  font-size: 2rem;
  color: #d1d5db;
  transition: transform var(--transition-fast);
}

.star:active { transform: scale(0.9); }
.star.filled { color: #f59e0b; }

.review-modal label {
  display: block;
  margin-bottom: 0.5rem;
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.review-modal textarea {
  width: 100%;
  padding: 0.75rem;
  border: 1px solid var(--border);
  border-radius: 8px;
  font-family: inherit;
  resize: vertical;
}

/* === Success === */
.success-body { text-align: center; }

.success-check {
  width: 4rem;
  height: 4rem;
  margin: 0 auto 1rem;
  line-height: 4rem;
  font-size: 2rem;
  color: #ffffff;
  background: var(--emerald);
  border-radius: 50%;
}

.success-body h2 { font-size: var(--text-xl); margin-bottom: 0.5rem; }
.success-body p { color: var(--text-secondary); }

/* === Responsive === */
@media (max-width: 900px) {
  .showcase { grid-template-columns: 1fr; }
  .device-laptop { width: 100%; }
  .performance-strip { grid-template-columns: repeat(2, 1fr); }
  .details-columns { grid-template-columns: 1fr; }
}
"#;
