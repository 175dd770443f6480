use std::{fmt, ops::Range};

use tracing::debug;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Palette {
    pub name: &'static str,
    pub background: &'static str,
    pub text: &'static str,
    pub sub_neutral: &'static str,
    pub accent_1: &'static str,
    pub accent_2: &'static str,
    pub action_hover: &'static str,
}

const fn palette(
    name: &'static str,
    background: &'static str,
    text: &'static str,
    sub_neutral: &'static str,
    accent_1: &'static str,
    accent_2: &'static str,
    action_hover: &'static str,
) -> Palette {
    Palette {
        name,
        background,
        text,
        sub_neutral,
        accent_1,
        accent_2,
        action_hover,
    }
}

pub const PALETTES: &[Palette] = &[
    palette("Terracotta", "#FFF5EC", "#402E32", "#F6DCD6", "#DC753C", "#C94D3D", "#C47F5B"),
    palette("Cyberpunk Neon", "#0b0c15", "#E0E0E0", "#2A2D3E", "#00FF9F", "#FF0055", "#00CC80"),
    palette("Midnight Solar", "#002B36", "#93A1A1", "#073642", "#268BD2", "#B58900", "#2075C7"),
    palette("Deep Forest", "#1A1D1A", "#E8F5E9", "#2C3E2E", "#4CAF50", "#81C784", "#388E3C"),
    palette("Royal Luxury", "#121212", "#FCFCFC", "#2D2D2D", "#D4AF37", "#757575", "#B4941F"),
    palette("Vampire", "#282A36", "#F8F8F2", "#44475A", "#BD93F9", "#FF79C6", "#6272A4"),
    palette("Oceanic Depth", "#0F1C24", "#E0F7FA", "#1E333E", "#00BCD4", "#FF6F00", "#0097A7"),
    palette("Lavender Haze", "#F3E5F5", "#4A148C", "#E1BEE7", "#9C27B0", "#AB47BC", "#7B1FA2"),
    palette("Brutalist", "#FFFFFF", "#000000", "#E0E0E0", "#0000FF", "#FF0000", "#0000CC"),
    palette("Terminal", "#0D0D0D", "#33FF00", "#1A1A1A", "#33FF00", "#008F11", "#26BF00"),
    palette("Cherry Blossom", "#FFF0F5", "#5C2C35", "#FFC0CB", "#FF69B4", "#DB7093", "#C71585"),
    palette("Slate & Orange", "#27272A", "#FAFAFA", "#3F3F46", "#F97316", "#38BDF8", "#EA580C"),
    palette("Fintech Blue", "#F0F4F8", "#102A43", "#BCCCDC", "#334E68", "#627D98", "#243B53"),
    palette("Nordic Snow", "#FFFFFF", "#2E3440", "#ECEFF4", "#5E81AC", "#88C0D0", "#4C566A"),
    palette("Synthwave Sunset", "#241235", "#FFEEBB", "#432C58", "#FF2A6D", "#05D9E8", "#D11E56"),
    palette("Bumblebee", "#111111", "#FFFFFF", "#333333", "#FBBF24", "#F59E0B", "#D97706"),
];

// "#rrggbb" -> "r, g, b", for use inside rgba(var(--x-rgb), alpha)
pub fn hex_to_rgb(hex: &str) -> Option<String> {
    let hex = hex.strip_prefix('#')?;

    if hex.len() != 6 {
        return None;
    }

    let channel = |range: Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();

    Some(format!(
        "{}, {}, {}",
        channel(0..2)?,
        channel(2..4)?,
        channel(4..6)?
    ))
}

impl Palette {
    pub fn css_properties(&self) -> Vec<(&'static str, String)> {
        let mut props = vec![
            ("--background", self.background.to_owned()),
            ("--foreground", self.text.to_owned()),
            ("--text-primary", self.text.to_owned()),
            ("--text-secondary", self.accent_2.to_owned()),
            ("--accent-primary", self.accent_1.to_owned()),
            ("--accent-secondary", self.accent_2.to_owned()),
            ("--accent-muted", self.sub_neutral.to_owned()),
            ("--button-primary-hover", self.action_hover.to_owned()),
            ("--scrollbar-thumb", self.accent_1.to_owned()),
            ("--scrollbar-thumb-hover", self.action_hover.to_owned()),
            ("--scrollbar-track", self.background.to_owned()),
        ];

        if let Some(rgb) = hex_to_rgb(self.background) {
            props.push(("--background-rgb", rgb));
        }

        if let Some(rgb) = hex_to_rgb(self.text) {
            props.push(("--foreground-rgb", rgb));
        }

        props
    }

    // a :root rule carrying every custom property, ready for a <style> element
    pub fn root_rule(&self) -> String {
        let body = self
            .css_properties()
            .into_iter()
            .fold(String::new(), |a, (k, v)| a + &format!("  {k}: {v};\n"));

        format!(":root {{\n{body}}}\n")
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&'static Palette)>;

// the active palette plus whoever wants to hear about changes
//
// the webapp puts one of these into a context at the root; nothing reaches for a global
pub struct ThemeStore {
    palettes: &'static [Palette],
    index: usize,
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("index", &self.index)
            .field("current", &self.current().name)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        // PALETTES is a non-empty const
        ThemeStore {
            palettes: PALETTES,
            index: 0,
            next_id: 0,
            listeners: Vec::new(),
        }
    }
}

impl ThemeStore {
    /// Returns `None` for an empty palette list, since there would be no current theme.
    pub fn new(palettes: &'static [Palette]) -> Option<Self> {
        if palettes.is_empty() {
            return None;
        }

        Some(ThemeStore {
            palettes,
            ..ThemeStore::default()
        })
    }

    pub fn current(&self) -> &'static Palette {
        &self.palettes[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) -> &'static Palette {
        self.select((self.index + 1) % self.palettes.len())
    }

    pub fn previous(&mut self) -> &'static Palette {
        self.select((self.index + self.palettes.len() - 1) % self.palettes.len())
    }

    fn select(&mut self, index: usize) -> &'static Palette {
        self.index = index;

        let palette: &'static Palette = &self.palettes[index];
        debug!(palette = palette.name, "theme changed");

        for (_, listener) in self.listeners.iter_mut() {
            listener(palette);
        }

        palette
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&'static Palette) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);

        self.listeners.len() != before
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    #[test]
    fn next_and_previous_wrap() {
        let mut store = ThemeStore::default();

        assert_eq!(store.previous().name, PALETTES[PALETTES.len() - 1].name);
        assert_eq!(store.next().name, PALETTES[0].name);
        assert_eq!(store.next().name, PALETTES[1].name);
    }

    #[test]
    fn listeners_hear_changes_until_unsubscribed() {
        let heard = Rc::new(RefCell::new(Vec::new()));
        let mut store = ThemeStore::default();

        let sink = heard.clone();
        let id = store.subscribe(move |p| sink.borrow_mut().push(p.name));

        store.next();
        store.next();
        assert!(store.unsubscribe(id));
        store.next();

        assert_eq!(*heard.borrow(), vec![PALETTES[1].name, PALETTES[2].name]);
        assert!(!store.unsubscribe(id));
    }

    #[test]
    fn empty_palette_list_builds_no_store() {
        assert!(ThemeStore::new(&[]).is_none());

        let store = ThemeStore::new(&PALETTES[1..]).unwrap();
        assert_eq!(store.current().name, PALETTES[1].name);
    }

    #[test]
    fn rgb_triples() {
        assert_eq!(hex_to_rgb("#FFF5EC").as_deref(), Some("255, 245, 236"));
        assert_eq!(hex_to_rgb("#0b0c15").as_deref(), Some("11, 12, 21"));
        assert_eq!(hex_to_rgb("FFF5EC"), None);
        assert_eq!(hex_to_rgb("#FFF"), None);
        assert_eq!(hex_to_rgb("#GG0000"), None);
    }

    #[test]
    fn root_rule_carries_rgb_variants() {
        let rule = PALETTES[0].root_rule();

        assert!(rule.starts_with(":root {"));
        assert!(rule.contains("--background: #FFF5EC;"));
        assert!(rule.contains("--background-rgb: 255, 245, 236;"));
        assert!(rule.contains("--foreground-rgb: 64, 46, 50;"));
    }
}
