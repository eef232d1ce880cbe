use super::PULSE_STEP;
use dartcore::{DartNumber, Mode, Outcome, Point, Sector, Session};

/// Board widget state: the session plus where the board sits in the widget.
pub struct BoardModel {
    pub session: Session,
    pub center: Point,
    pub radius: f64,
    pub selected: Option<DartNumber>,
    pub pulse: f64,
}

impl BoardModel {
    pub fn new(session: Session, size: f64) -> Self {
        let mut model = Self {
            session,
            center: Point::default(),
            radius: 0.0,
            selected: None,
            pulse: 0.0,
        };
        model.resize(size, size);
        model
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.center = Point::new(width / 2.0, height / 2.0);
        self.radius = width.min(height) / 2.0;
    }

    /// Widget coordinates to board coordinates (origin at the center).
    pub fn to_board(&self, x: f64, y: f64) -> Point {
        Point::new(x - self.center.x, y - self.center.y)
    }

    /// Selecting the selected number again drops the selection.
    pub fn select(&mut self, number: DartNumber) {
        self.selected = match self.selected {
            Some(current) if current == number => None,
            _ if self.session.tray().contains(number) => Some(number),
            _ => None,
        };
    }

    /// Places the selected number, or picks up whatever the click hit.
    pub fn click(&mut self, x: f64, y: f64) -> ClickAction {
        let point = self.to_board(x, y);
        let outcome = match self.selected {
            Some(number) => self.session.drop_number(point, number),
            None => self.session.pick_up(point),
        };

        if let Outcome::Committed { .. } = outcome {
            self.selected = None;
        }
        if let Outcome::Rejected(reason) = outcome {
            log::info!("Placement rejected: {}", reason);
        }

        ClickAction::from(outcome)
    }

    pub fn toggle(&mut self, mode: Mode) -> bool {
        self.selected = None;
        self.session.toggle(mode)
    }

    pub fn reset(&mut self) {
        self.selected = None;
        self.session.reset();
    }

    /// Advances the glow phase. Returns true when something on screen pulses.
    pub fn advance_pulse(&mut self) -> bool {
        self.pulse += PULSE_STEP;
        let board = self.session.board();
        board.is_training() && Sector::all().any(|s| board.is_correct(s))
    }

    pub fn status(&self) -> String {
        let board = self.session.board();
        let mode = match (board.is_training(), board.is_hardcore()) {
            (false, false) => "Free",
            (true, false) => "Training",
            (false, true) => "Hardcore",
            (true, true) => "Training + Hardcore",
        };

        if board.is_hardcore() {
            let (locked, dealt) = self.session.drill_progress();
            if self.session.is_drill_complete() {
                format!("{mode}: drill complete ({locked}/{dealt})")
            } else {
                format!("{mode}: {locked}/{dealt} locked")
            }
        } else if board.is_solved() {
            format!("{mode}: board complete")
        } else {
            format!("{mode}: {}/20 correct", board.correct_count())
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickAction {
    pub should_redraw: bool,
    pub should_buzz: bool,
    pub tray_changed: bool,
}

impl ClickAction {
    pub fn new(should_redraw: bool, should_buzz: bool, tray_changed: bool) -> Self {
        Self {
            should_redraw,
            should_buzz,
            tray_changed,
        }
    }
}

impl From<Outcome> for ClickAction {
    fn from(outcome: Outcome) -> Self {
        let changed = outcome.changed_board();
        Self::new(changed, outcome.is_wrong_number(), changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dartcore::{Modes, SessionOptions, official_number};

    fn num(n: u8) -> DartNumber {
        DartNumber::try_from(n).unwrap()
    }

    fn model(modes: Modes) -> BoardModel {
        BoardModel::new(
            Session::new(SessionOptions {
                modes,
                seed: Some(1),
                ..SessionOptions::default()
            }),
            600.0,
        )
    }

    /// Widget coordinates of a point inside `sector`.
    fn click_target(model: &BoardModel, sector: usize) -> (f64, f64) {
        let p = Sector::wrapping(sector).point_at(model.radius * 0.7);
        (p.x + model.center.x, p.y + model.center.y)
    }

    #[test]
    fn test_resize_centers_board() {
        let mut m = model(Modes::default());
        m.resize(800.0, 600.0);
        assert_eq!(m.center, Point::new(400.0, 300.0));
        assert_eq!(m.radius, 300.0);
        assert_eq!(m.to_board(400.0, 0.0), Point::new(0.0, -300.0));
    }

    #[test]
    fn test_click_with_selection_places_number() {
        let mut m = model(Modes::default());
        m.select(num(20));
        let (x, y) = click_target(&m, 0);
        let action = m.click(x, y);
        assert_eq!(action, ClickAction::new(true, false, true));
        assert_eq!(m.selected, None);
        assert_eq!(m.session.board().get(Sector::wrapping(0)), Some(num(20)));

        // selecting a number that is on the board does nothing
        m.select(num(20));
        assert_eq!(m.selected, None);
    }

    #[test]
    fn test_click_without_selection_picks_up() {
        let mut m = model(Modes::default());
        m.select(num(3));
        let (x, y) = click_target(&m, 10);
        m.click(x, y);
        let action = m.click(x, y);
        assert!(action.tray_changed);
        assert!(m.session.tray().contains(num(3)));

        // empty sector: nothing to redraw
        assert_eq!(m.click(x, y), ClickAction::default());
    }

    #[test]
    fn test_wrong_hardcore_number_buzzes_and_keeps_selection() {
        let mut m = model(Modes {
            training: false,
            hardcore: true,
        });
        let target = m.session.drill_targets()[0];
        m.select(target);
        let wrong = dartcore::official_sector(target).next();
        let (x, y) = click_target(&m, wrong.index());
        let action = m.click(x, y);
        assert!(action.should_buzz);
        assert!(!action.should_redraw);
        assert_eq!(m.selected, Some(target));
    }

    #[test]
    fn test_select_toggles() {
        let mut m = model(Modes::default());
        m.select(num(9));
        m.select(num(9));
        assert_eq!(m.selected, None);
        m.select(num(9));
        m.select(num(4));
        assert_eq!(m.selected, Some(num(4)));
    }

    #[test]
    fn test_pulse_only_matters_in_training_with_correct_sector() {
        let mut m = model(Modes::default());
        let top = Sector::wrapping(0);
        m.select(official_number(top));
        let (x, y) = click_target(&m, 0);
        m.click(x, y);
        assert!(!m.advance_pulse());
        m.toggle(Mode::Training);
        assert!(m.advance_pulse());
        assert!(m.pulse > 0.0);
        assert_eq!(m.status(), "Training: 1/20 correct");
    }

    #[test]
    fn test_status_in_hardcore() {
        let mut m = model(Modes::default());
        m.toggle(Mode::Hardcore);
        assert_eq!(m.status(), "Hardcore: 0/5 locked");
        m.reset();
        assert_eq!(m.status(), "Free: 0/20 correct");
    }
}
