use tracing::{debug, warn};

// how long the carousel gets to animate out before the detail markup replaces it, and
// how long the detail view gets to animate out on the way back
pub const ENTER_DELAY_MS: u32 = 500;
pub const EXIT_DELAY_MS: u32 = 400;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Target {
    Carousel,
    Detail,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Phase {
    #[default]
    Carousel,
    Transitioning(Target),
    Detail,
}

// proof that a transition was started
//
// whoever drives the animation (a timer, a transitionend handler, or both) hands the
// ticket back through complete(); only the ticket from the latest open/close counts
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Ticket {
    generation: u64,
    target: Target,
}

impl Ticket {
    pub fn delay_ms(&self) -> u32 {
        match self.target {
            Target::Detail => ENTER_DELAY_MS,
            Target::Carousel => EXIT_DELAY_MS,
        }
    }
}

// carousel <-> detail switch
//
// selected is set for the whole time the detail view is showing or animating, and
// cleared only when the exit completes
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DetailView {
    phase: Phase,
    selected: Option<String>,
    generation: u64,
}

impl DetailView {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    // carousel markup stays mounted until the entry transition lands
    pub fn shows_detail(&self) -> bool {
        matches!(
            self.phase,
            Phase::Detail | Phase::Transitioning(Target::Carousel)
        )
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::Transitioning(_))
    }

    // the carousel only reacts to clicks and steps while it is settled on stage
    pub fn carousel_interactive(&self) -> bool {
        self.phase == Phase::Carousel
    }

    fn issue(&mut self, target: Target) -> Ticket {
        self.generation += 1;
        self.phase = Phase::Transitioning(target);

        Ticket {
            generation: self.generation,
            target,
        }
    }

    // only from the carousel; going from one detail view straight to another is not a
    // supported transition and is refused
    pub fn open(&mut self, project_id: &str) -> Option<Ticket> {
        if self.phase != Phase::Carousel {
            warn!(phase = ?self.phase, project = project_id, "refusing to open detail view");
            return None;
        }

        self.selected = Some(project_id.to_owned());

        let ticket = self.issue(Target::Detail);
        debug!(project = project_id, generation = ticket.generation, "opening detail view");

        Some(ticket)
    }

    pub fn close(&mut self) -> Option<Ticket> {
        match self.phase {
            Phase::Detail | Phase::Transitioning(Target::Detail) => {
                let ticket = self.issue(Target::Carousel);
                debug!(generation = ticket.generation, "closing detail view");

                Some(ticket)
            }
            _ => None,
        }
    }

    // returns whether the ticket was current and moved the state along
    pub fn complete(&mut self, ticket: Ticket) -> bool {
        if ticket.generation != self.generation
            || self.phase != Phase::Transitioning(ticket.target)
        {
            return false;
        }

        match ticket.target {
            Target::Detail => {
                self.phase = Phase::Detail;
            }
            Target::Carousel => {
                self.phase = Phase::Carousel;
                self.selected = None;
            }
        }

        true
    }

    // teardown: anything still in flight becomes stale, and the view settles where
    // its current transition was headed
    pub fn cancel(&mut self) {
        self.generation += 1;

        match self.phase {
            Phase::Transitioning(Target::Detail) => self.phase = Phase::Detail,
            Phase::Transitioning(Target::Carousel) => {
                self.phase = Phase::Carousel;
                self.selected = None;
            }
            _ => (),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_then_complete_then_close_then_complete() {
        let mut view = DetailView::default();

        let enter = view.open("civy").unwrap();
        assert_eq!(view.phase(), Phase::Transitioning(Target::Detail));
        assert_eq!(view.selected(), Some("civy"));
        assert!(!view.shows_detail());
        assert_eq!(enter.delay_ms(), ENTER_DELAY_MS);

        assert!(view.complete(enter));
        assert_eq!(view.phase(), Phase::Detail);
        assert!(view.shows_detail());

        let exit = view.close().unwrap();
        assert_eq!(view.selected(), Some("civy"));
        assert_eq!(exit.delay_ms(), EXIT_DELAY_MS);

        assert!(view.complete(exit));
        assert_eq!(view.phase(), Phase::Carousel);
        assert_eq!(view.selected(), None);
    }

    #[test]
    fn close_before_entry_lands_never_leaves_a_selection() {
        let mut view = DetailView::default();

        let enter = view.open("civy").unwrap();
        let exit = view.close().unwrap();

        // the entry timer fires late, after the close was requested
        assert!(!view.complete(enter));
        assert!(view.complete(exit));

        assert_eq!(view.phase(), Phase::Carousel);
        assert_eq!(view.selected(), None);

        // and a straggler after the fact changes nothing
        assert!(!view.complete(enter));
        assert_eq!(view.selected(), None);
    }

    #[test]
    fn completion_is_idempotent() {
        let mut view = DetailView::default();

        let enter = view.open("civy").unwrap();

        assert!(view.complete(enter));
        assert!(!view.complete(enter));
        assert_eq!(view.phase(), Phase::Detail);
    }

    #[test]
    fn detail_to_detail_is_refused() {
        let mut view = DetailView::default();

        let enter = view.open("civy").unwrap();
        view.complete(enter);

        assert_eq!(view.open("palindot"), None);
        assert_eq!(view.selected(), Some("civy"));
    }

    #[test]
    fn reopening_mid_exit_is_refused_until_the_exit_lands() {
        let mut view = DetailView::default();

        let enter = view.open("civy").unwrap();
        view.complete(enter);
        let exit = view.close().unwrap();

        assert_eq!(view.open("palindot"), None);

        view.complete(exit);
        assert!(view.open("palindot").is_some());
        assert_eq!(view.selected(), Some("palindot"));
    }

    #[test]
    fn carousel_is_inert_from_open_until_the_exit_lands() {
        let mut view = DetailView::default();
        assert!(view.carousel_interactive());

        let entry = view.open("civy").unwrap();
        assert!(!view.carousel_interactive());

        assert!(view.complete(entry));
        assert!(!view.carousel_interactive());

        let exit = view.close().unwrap();
        assert!(!view.carousel_interactive());

        assert!(view.complete(exit));
        assert!(view.carousel_interactive());
    }

    #[test]
    fn close_from_the_carousel_does_nothing() {
        let mut view = DetailView::default();

        assert_eq!(view.close(), None);
        assert_eq!(view, DetailView::default());
    }

    #[test]
    fn cancel_settles_and_invalidates_pending_tickets() {
        let mut view = DetailView::default();

        let enter = view.open("civy").unwrap();
        view.complete(enter);
        let exit = view.close().unwrap();

        view.cancel();

        assert_eq!(view.phase(), Phase::Carousel);
        assert_eq!(view.selected(), None);
        assert!(!view.complete(exit));
    }
}
