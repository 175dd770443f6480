use constcat::concat;

mod components;
mod sections;
mod variables;

use components::BASE_COMPONENTS;
use sections::{
    CAROUSEL_STYLES, CERTIFICATION_STYLES, EXPERIENCE_STYLES, NAV_STYLES, SECTION_STYLES,
    TOAST_STYLES,
};
use variables::CSS_VARIABLES;

// everything but the palette, which the theme renders separately
pub const MODERN_STYLES: &str = concat!(
    r#"
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.5;
  transition: background-color var(--transition-normal) var(--easing-standard),
              color var(--transition-normal) var(--easing-standard);
}

a {
  color: var(--accent-primary);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}

::-webkit-scrollbar-thumb {
  background: var(--scrollbar-thumb);
}

::-webkit-scrollbar-thumb:hover {
  background: var(--scrollbar-thumb-hover);
}

::-webkit-scrollbar-track {
  background: var(--scrollbar-track);
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    NAV_STYLES,
    SECTION_STYLES,
    CAROUSEL_STYLES,
    EXPERIENCE_STYLES,
    CERTIFICATION_STYLES,
    TOAST_STYLES,
);
