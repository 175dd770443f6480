// colors are not in here; the theme writes its own :root rule with the palette
pub const CSS_VARIABLES: &str = r#"
:root {
  /* Layout */
  --nav-height: 64px;
  --container-width: 1200px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-12: 48px;
  --space-16: 64px;

  /* Radius */
  --radius-sm: 4px;
  --radius-md: 8px;
  --radius-lg: 16px;
  --radius-full: 9999px;

  /* Transitions; the detail view timings must stay below the state machine delays */
  --transition-fast: 150ms;
  --transition-normal: 300ms;
  --transition-enter: 450ms;
  --transition-exit: 350ms;
  --easing-standard: cubic-bezier(0.4, 0, 0.2, 1);

  /* Carousel geometry */
  --card-width: 320px;
  --card-gap: 48px;
}
"#;
