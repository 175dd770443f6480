use tracing::debug;

use api::catalog::{Category, Project};

use crate::filter::{FilterChange, FilterSelection, filter_projects};

pub const RING_SIZE: usize = 7;
pub const ACTIVE_POSITION: i64 = 3;

// lists up to this length mount every card and clamp the cursor
pub const SMALL_LIST_MAX: usize = 6;

// minimum time between two accepted steps, so a burst of clicks or a shaky drag
// cannot queue up a dozen transitions
pub const STEP_INTERVAL_MS: i64 = 600;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn delta(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

// map any index, negative or past the end, back into 0..len
pub fn wrap(index: i64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    index.rem_euclid(len as i64) as usize
}

#[derive(Clone, Debug)]
pub struct StepLimiter {
    interval_ms: i64,
    last_accepted: Option<i64>,
}

impl Default for StepLimiter {
    fn default() -> Self {
        StepLimiter::new(STEP_INTERVAL_MS)
    }
}

impl StepLimiter {
    pub fn new(interval_ms: i64) -> Self {
        StepLimiter {
            interval_ms,
            last_accepted: None,
        }
    }

    pub fn try_step(&mut self, now_ms: i64) -> bool {
        match self.last_accepted {
            // a clock that went backwards does not lock the carousel
            Some(last) if (0..self.interval_ms).contains(&(now_ms - last)) => false,
            _ => {
                self.last_accepted = Some(now_ms);
                true
            }
        }
    }
}

// one card on stage
//
// position 3 is centre stage, 0 and 6 are the far edges; small lists can push cards
// past either edge, which the stylesheet treats as off stage.  the key is what the
// renderer should use as element identity
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RingSlot<'a> {
    pub project: &'a Project,
    pub position: i64,
    pub key: String,
    pub active: bool,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Ring<'a> {
    pub slots: Vec<RingSlot<'a>>,
    pub active_slot: Option<usize>,
}

// the project carousel
//
// owns the filter selection and a cursor into the filtered list.  two regimes:
//
// small lists (up to six) keep every card mounted with its project id as key, and the
// cursor is clamped; moving only changes each card's position so css transitions can
// slide them without a remount
//
// larger lists use a virtual cursor that is never wrapped.  the seven ring slots show
// filtered[(cursor + offset) mod len] and are keyed by the virtual index, so a project
// that comes around again after a full lap is a new element instead of one that flies
// across the stage from the opposite edge
#[derive(Clone, Debug)]
pub struct Carousel {
    catalog: Vec<Project>,
    selection: FilterSelection,
    filtered: Vec<Project>,
    cursor: i64,
    limiter: StepLimiter,
}

impl Carousel {
    pub fn new(catalog: Vec<Project>) -> Self {
        let selection = FilterSelection::default();
        let filtered = filter_projects(&catalog, &selection);
        let cursor = fallback_cursor(filtered.len());

        Carousel {
            catalog,
            selection,
            filtered,
            cursor,
            limiter: StepLimiter::default(),
        }
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn filtered(&self) -> &[Project] {
        &self.filtered
    }

    pub fn len(&self) -> usize {
        self.filtered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    fn is_small(&self) -> bool {
        self.filtered.len() <= SMALL_LIST_MAX
    }

    pub fn active_index(&self) -> Option<usize> {
        if self.filtered.is_empty() {
            return None;
        }

        Some(wrap(self.cursor, self.filtered.len()))
    }

    pub fn active_project(&self) -> Option<&Project> {
        self.active_index().map(|idx| &self.filtered[idx])
    }

    pub fn toggle_category(&mut self, category: Category) -> FilterChange {
        let mut selection = self.selection.clone();
        let change = selection.toggle_category(category);

        self.apply(selection);
        change
    }

    pub fn set_tech_filter(&mut self, tech_id: Option<&str>) -> FilterChange {
        let mut selection = self.selection.clone();
        let change = selection.set_tech_filter(tech_id);

        self.apply(selection);
        change
    }

    // install a new selection and re-derive everything that depends on it
    //
    // the card that was centre stage stays there if it survives the filter; otherwise
    // the cursor restarts at the middle card (small lists) or the first (large lists)
    pub fn apply(&mut self, selection: FilterSelection) {
        let previous = self.active_project().map(|p| p.id);

        self.selection = selection;
        self.filtered = filter_projects(&self.catalog, &self.selection);

        let survivor = previous.and_then(|id| self.filtered.iter().position(|p| p.id == id));

        match survivor {
            Some(idx) => self.seek(idx),
            None => self.cursor = fallback_cursor(self.filtered.len()),
        }

        debug!(
            len = self.filtered.len(),
            cursor = self.cursor,
            kept_active = survivor.is_some(),
            "carousel filter applied"
        );
    }

    // rate-limited step; returns whether the cursor moved
    pub fn shift(&mut self, direction: Direction, now_ms: i64) -> bool {
        if self.filtered.is_empty() {
            return false;
        }

        let next = self.cursor + direction.delta();

        if self.is_small() && (next < 0 || next >= self.filtered.len() as i64) {
            return false;
        }

        if !self.limiter.try_step(now_ms) {
            return false;
        }

        self.cursor = next;
        true
    }

    // bring a project to centre stage, taking the short way round on large lists
    pub fn focus(&mut self, project_id: &str) -> bool {
        let Some(target) = self.filtered.iter().position(|p| p.id == project_id) else {
            return false;
        };

        self.seek(target);
        true
    }

    // point the cursor at filtered[target]; large lists keep their virtual cursor and
    // move by the shortest signed offset, so cards already on stage keep their keys
    fn seek(&mut self, target: usize) {
        if self.is_small() {
            self.cursor = target as i64;
            return;
        }

        let len = self.filtered.len() as i64;
        let mut offset = target as i64 - wrap(self.cursor, len as usize) as i64;

        if offset > len / 2 {
            offset -= len;
        } else if offset < -(len / 2) {
            offset += len;
        }

        self.cursor += offset;
    }

    pub fn ring(&self) -> Ring<'_> {
        let len = self.filtered.len();

        if len == 0 {
            return Ring::default();
        }

        if self.is_small() {
            // 3 + (i - len/2) + (len/2 - cursor), i.e. the cursor card lands on 3
            let slots: Vec<RingSlot> = self
                .filtered
                .iter()
                .enumerate()
                .map(|(i, project)| RingSlot {
                    project,
                    position: ACTIVE_POSITION + i as i64 - self.cursor,
                    key: project.id.to_owned(),
                    active: i as i64 == self.cursor,
                })
                .collect();

            let active_slot = slots.iter().position(|s| s.active);

            return Ring { slots, active_slot };
        }

        let slots = (0..RING_SIZE as i64)
            .map(|position| {
                let virtual_index = self.cursor + position - ACTIVE_POSITION;
                let project = &self.filtered[wrap(virtual_index, len)];

                RingSlot {
                    project,
                    position,
                    key: format!("{}@{}", project.id, virtual_index),
                    active: position == ACTIVE_POSITION,
                }
            })
            .collect();

        Ring {
            slots,
            active_slot: Some(ACTIVE_POSITION as usize),
        }
    }
}

fn fallback_cursor(len: usize) -> i64 {
    if len <= SMALL_LIST_MAX {
        (len / 2) as i64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashSet};

    use pretty_assertions::assert_eq;

    use api::catalog::SecondaryLink;

    use super::*;

    const IDS: [&str; 12] = [
        "p0", "p1", "p2", "p3", "p4", "p5", "p6", "p7", "p8", "p9", "p10", "p11",
    ];

    const WITH_ZIG: &[&str] = &["zig", "git"];
    const WITHOUT_ZIG: &[&str] = &["git"];
    const TOOLS: &[Category] = &[Category::Tools];
    const WEBAPPS: &[Category] = &[Category::Webapps];

    // every fourth project (p1, p5, p9) uses zig; odd projects are webapps
    fn catalog(len: usize) -> Vec<Project> {
        IDS[..len]
            .iter()
            .copied()
            .enumerate()
            .map(|(i, id)| Project {
                id,
                title: id,
                repo: "someone/something",
                tech: if i % 4 == 1 { WITH_ZIG } else { WITHOUT_ZIG },
                categories: if i % 2 == 0 { TOOLS } else { WEBAPPS },
                link: SecondaryLink::None,
                media: None,
            })
            .collect()
    }

    // steps far enough apart that the limiter never interferes
    fn step(carousel: &mut Carousel, direction: Direction, clock: &mut i64) -> bool {
        *clock += STEP_INTERVAL_MS;
        carousel.shift(direction, *clock)
    }

    fn ring_ids(carousel: &Carousel) -> Vec<&'static str> {
        carousel.ring().slots.iter().map(|s| s.project.id).collect()
    }

    #[test]
    fn small_lists_clamp_instead_of_wrapping() {
        for len in 1..=SMALL_LIST_MAX {
            let mut carousel = Carousel::new(catalog(len));
            let mut clock = 0;

            for _ in 0..10 {
                step(&mut carousel, Direction::Forward, &mut clock);
                assert!((0..len as i64).contains(&carousel.cursor()));
            }
            assert_eq!(carousel.cursor(), len as i64 - 1);

            for _ in 0..10 {
                step(&mut carousel, Direction::Backward, &mut clock);
                assert!((0..len as i64).contains(&carousel.cursor()));
            }
            assert_eq!(carousel.cursor(), 0);
        }
    }

    #[test]
    fn small_list_ring_mounts_every_card_with_stable_keys() {
        let mut carousel = Carousel::new(catalog(5));
        let mut clock = 0;

        let before: Vec<String> = carousel.ring().slots.into_iter().map(|s| s.key).collect();
        step(&mut carousel, Direction::Forward, &mut clock);
        let ring = carousel.ring();
        let after: Vec<String> = ring.slots.iter().map(|s| s.key.clone()).collect();

        assert_eq!(before, after);
        assert_eq!(ring.slots.iter().map(|s| s.position).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
        assert_eq!(ring.active_slot, Some(3));
    }

    #[test]
    fn seven_items_lap_back_to_the_same_cards_with_new_keys() {
        let mut carousel = Carousel::new(catalog(7));
        let mut clock = 0;

        let start = carousel.ring();
        let start_ids: BTreeSet<_> = start.slots.iter().map(|s| s.project.id).collect();
        let start_keys: HashSet<_> = start.slots.iter().map(|s| s.key.clone()).collect();

        for _ in 0..7 {
            assert!(step(&mut carousel, Direction::Forward, &mut clock));
        }

        let lapped = carousel.ring();
        let lapped_ids: BTreeSet<_> = lapped.slots.iter().map(|s| s.project.id).collect();
        let lapped_keys: HashSet<_> = lapped.slots.iter().map(|s| s.key.clone()).collect();

        assert_eq!(start_ids, lapped_ids);
        assert!(start_keys.is_disjoint(&lapped_keys));
        assert_eq!(carousel.active_project(), Some(&catalog(7)[0]));
    }

    #[test]
    fn ring_keys_never_collide_within_a_frame() {
        for len in 7..=12 {
            let carousel = Carousel::new(catalog(len));
            let keys: HashSet<_> = carousel.ring().slots.into_iter().map(|s| s.key).collect();
            assert_eq!(keys.len(), RING_SIZE);
        }
    }

    #[test]
    fn large_lists_keep_the_active_slot_centred_and_step_back_symmetrically() {
        for len in 8..=12 {
            let mut carousel = Carousel::new(catalog(len));
            let mut clock = 0;
            let origin = carousel.cursor();

            for _ in 0..(len + 3) {
                step(&mut carousel, Direction::Forward, &mut clock);
                let ring = carousel.ring();
                assert_eq!(ring.active_slot, Some(3));
                assert!(ring.slots[3].active);
                assert_eq!(ring.slots[3].project.id, carousel.active_project().unwrap().id);
            }

            for _ in 0..(len + 3) {
                step(&mut carousel, Direction::Backward, &mut clock);
            }

            assert_eq!(wrap(carousel.cursor(), len), wrap(origin, len));
        }
    }

    #[test]
    fn large_ring_wraps_around_the_list_edges() {
        let carousel = Carousel::new(catalog(9));

        assert_eq!(ring_ids(&carousel), vec!["p6", "p7", "p8", "p0", "p1", "p2", "p3"]);
    }

    #[test]
    fn steps_inside_the_interval_are_dropped() {
        let mut carousel = Carousel::new(catalog(9));

        assert!(carousel.shift(Direction::Forward, 1_000));
        assert!(!carousel.shift(Direction::Forward, 1_000 + STEP_INTERVAL_MS - 1));
        assert!(carousel.shift(Direction::Forward, 1_000 + STEP_INTERVAL_MS));
        assert_eq!(carousel.cursor(), 2);
    }

    #[test]
    fn clamped_steps_do_not_consume_the_interval() {
        let mut carousel = Carousel::new(catalog(3));

        assert!(carousel.shift(Direction::Forward, 0));
        assert!(!carousel.shift(Direction::Forward, STEP_INTERVAL_MS));
        assert!(carousel.shift(Direction::Backward, STEP_INTERVAL_MS));
    }

    #[test]
    fn narrowing_to_three_recentres_on_the_middle_card() {
        let mut carousel = Carousel::new(catalog(11));

        // p0 is active and does not use zig
        carousel.set_tech_filter(Some("zig"));

        let ring = carousel.ring();
        assert_eq!(carousel.len(), 3);
        assert_eq!(ring_ids(&carousel), vec!["p1", "p5", "p9"]);
        assert_eq!(ring.slots.iter().map(|s| s.position).collect::<Vec<_>>(), vec![2, 3, 4]);
        assert_eq!(carousel.active_project().map(|p| p.id), Some("p5"));
    }

    #[test]
    fn narrowing_keeps_a_surviving_active_card() {
        let mut carousel = Carousel::new(catalog(11));
        assert!(carousel.focus("p9"));

        carousel.set_tech_filter(Some("zig"));

        assert_eq!(carousel.active_project().map(|p| p.id), Some("p9"));
        assert_eq!(carousel.cursor(), 2);
        assert_eq!(
            carousel.ring().slots.iter().map(|s| s.position).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn widening_back_keeps_the_active_card() {
        let mut carousel = Carousel::new(catalog(11));
        carousel.toggle_category(Category::Webapps);
        assert!(carousel.focus("p7"));

        carousel.toggle_category(Category::Webapps);

        assert_eq!(carousel.len(), 11);
        assert_eq!(carousel.active_project().map(|p| p.id), Some("p7"));
    }

    #[test]
    fn reapplying_the_same_selection_keeps_every_key() {
        let mut carousel = Carousel::new(catalog(12));
        let mut clock = 0;

        for _ in 0..14 {
            step(&mut carousel, Direction::Forward, &mut clock);
        }

        let keys = |c: &Carousel| c.ring().slots.into_iter().map(|s| s.key).collect::<Vec<_>>();
        let before = keys(&carousel);

        carousel.apply(carousel.selection().clone());

        assert_eq!(keys(&carousel), before);
        assert_eq!(carousel.cursor(), 14);
    }

    #[test]
    fn a_bridging_tech_that_filters_nothing_keeps_the_stage() {
        let mut carousel = Carousel::new(catalog(9));
        let mut clock = 0;

        for _ in 0..3 {
            step(&mut carousel, Direction::Backward, &mut clock);
        }

        let before: Vec<String> = carousel.ring().slots.into_iter().map(|s| s.key).collect();

        carousel.set_tech_filter(Some("git"));

        let after: Vec<String> = carousel.ring().slots.into_iter().map(|s| s.key).collect();
        assert_eq!(after, before);
        assert_eq!(carousel.active_project().map(|p| p.id), Some("p6"));
    }

    #[test]
    fn a_clock_that_steps_back_does_not_lock_the_carousel() {
        let mut carousel = Carousel::new(catalog(9));

        assert!(carousel.shift(Direction::Forward, 10_000));
        assert!(carousel.shift(Direction::Forward, 2_000));
        assert!(!carousel.shift(Direction::Forward, 2_000 + STEP_INTERVAL_MS - 1));
        assert_eq!(carousel.cursor(), 2);
    }

    #[test]
    fn filtering_to_nothing_leaves_an_empty_ring() {
        let mut carousel = Carousel::new(catalog(4));
        carousel.set_tech_filter(Some("cobol"));

        assert!(carousel.is_empty());
        assert_eq!(carousel.ring(), Ring::default());
        assert!(!carousel.shift(Direction::Forward, 0));
        assert_eq!(carousel.active_project(), None);
    }

    #[test]
    fn focus_takes_the_short_way_round() {
        let mut carousel = Carousel::new(catalog(10));

        assert!(carousel.focus("p9"));
        assert_eq!(carousel.cursor(), -1);

        assert!(carousel.focus("p2"));
        assert_eq!(carousel.cursor(), 2);

        assert!(!carousel.focus("missing"));
    }

    #[test]
    fn wrap_handles_negative_indices() {
        assert_eq!(wrap(-1, 7), 6);
        assert_eq!(wrap(15, 7), 1);
        assert_eq!(wrap(3, 0), 0);
    }
}
