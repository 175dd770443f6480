pub const NAV_STYLES: &str = r#"
.navbar {
  position: sticky;
  top: 0;
  z-index: 10;
  height: var(--nav-height);
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0 var(--space-6);
  background-color: rgba(var(--background-rgb), 0.85);
  backdrop-filter: blur(8px);
}

.navbar .nav-links {
  display: flex;
  gap: var(--space-4);
}

.navbar .nav-tools {
  display: flex;
  align-items: center;
  gap: var(--space-2);
}

.language-switcher button.active {
  text-decoration: underline;
}
"#;

pub const SECTION_STYLES: &str = r#"
section {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: var(--space-16) var(--space-6);
}

section h2 {
  margin-bottom: var(--space-6);
  color: var(--accent-primary);
}

.hero h1 {
  font-size: clamp(2.5rem, 8vw, 5rem);
  line-height: 1.1;
}

.tech-grid {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
}

.filter-bar {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: var(--space-2);
  margin-bottom: var(--space-6);
}

.tech-search {
  position: relative;
}

.tech-search .dropdown {
  position: absolute;
  top: calc(100% + var(--space-2));
  left: 0;
  z-index: 5;
  width: 260px;
  max-height: 320px;
  overflow-y: auto;
  padding: var(--space-2);
  border-radius: var(--radius-md);
  background-color: var(--background);
  border: 1px solid var(--accent-muted);
}

.tech-search .result {
  padding: var(--space-1) var(--space-2);
  border-radius: var(--radius-sm);
  cursor: pointer;
}

.tech-search .result.focused {
  background-color: var(--accent-muted);
}
"#;

pub const CAROUSEL_STYLES: &str = r#"
.carousel-stage {
  position: relative;
  height: 420px;
  overflow: hidden;
  touch-action: pan-y;
  user-select: none;
  transition: opacity var(--transition-enter) var(--easing-standard);
}

.carousel-stage.leaving {
  opacity: 0;
}

.project-card {
  position: absolute;
  top: 0;
  left: 50%;
  width: var(--card-width);
  padding: var(--space-4);
  border-radius: var(--radius-lg);
  background-color: var(--accent-muted);
  transform: translateX(calc(-50% + (var(--position) - 3) * (var(--card-width) + var(--card-gap))))
             scale(calc(1 - 0.12 * var(--distance)));
  opacity: calc(1 - 0.3 * var(--distance));
  transition: transform var(--transition-normal) var(--easing-standard),
              opacity var(--transition-normal) var(--easing-standard);
  cursor: pointer;
}

.project-card.active {
  outline: 2px solid var(--accent-primary);
}

.project-card .tech-list {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-1);
  margin-top: var(--space-2);
}

.carousel-controls {
  display: flex;
  justify-content: center;
  gap: var(--space-4);
  margin-top: var(--space-4);
}

.carousel-empty {
  text-align: center;
  padding: var(--space-12) 0;
}

.project-detail {
  transition: opacity var(--transition-exit) var(--easing-standard),
              transform var(--transition-exit) var(--easing-standard);
}

.project-detail.leaving {
  opacity: 0;
  transform: translateY(16px);
}

.project-detail .links {
  display: flex;
  gap: var(--space-4);
  margin-top: var(--space-4);
}
"#;

pub const EXPERIENCE_STYLES: &str = r#"
.timeline {
  list-style: none;
  border-left: 2px solid var(--accent-muted);
  padding-left: var(--space-6);
}

.timeline li {
  position: relative;
  margin-bottom: var(--space-8);
}

.timeline li::before {
  content: "";
  position: absolute;
  left: calc(-1 * var(--space-6) - 6px);
  top: 6px;
  width: 10px;
  height: 10px;
  border-radius: var(--radius-full);
  background-color: var(--accent-primary);
}

.timeline .date {
  font-size: 0.85rem;
  color: var(--accent-secondary);
}
"#;

pub const CERTIFICATION_STYLES: &str = r#"
.cert-card {
  display: flex;
  align-items: center;
  gap: var(--space-6);
  padding: var(--space-6);
  border-radius: var(--radius-lg);
  background-color: var(--accent-muted);
}

.cert-card img.logo {
  width: 72px;
  height: 72px;
  object-fit: contain;
}

.cert-dots {
  display: flex;
  justify-content: center;
  gap: var(--space-2);
  margin-top: var(--space-4);
}

.cert-dots button {
  width: 10px;
  height: 10px;
  border-radius: var(--radius-full);
  border: none;
  background-color: var(--accent-muted);
}

.cert-dots button.active {
  background-color: var(--accent-primary);
}
"#;

pub const TOAST_STYLES: &str = r#"
.theme-toast {
  position: fixed;
  right: var(--space-6);
  bottom: var(--space-6);
  z-index: 20;
  padding: var(--space-3) var(--space-4);
  border-radius: var(--radius-md);
  background-color: var(--background);
  border: 1px solid var(--accent-primary);
  box-shadow: 0 4px 16px rgba(var(--foreground-rgb), 0.2);
}

.theme-toast .swatches {
  display: flex;
  gap: var(--space-1);
  margin-top: var(--space-2);
}

.theme-toast .swatch {
  width: 20px;
  height: 20px;
  border-radius: var(--radius-sm);
}
"#;
