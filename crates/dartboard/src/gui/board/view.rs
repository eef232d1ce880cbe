use super::model::BoardModel;
use super::{FONT_SIZE, GHOST_ALPHA, GLOW_LAYERS, GLOW_WIDTH, LABEL_RADIUS, SEPARATOR_WIDTH};
use crate::gui::theme::ThemeColors;
use cairo::Context;
use dartcore::{Board, DartNumber, RingRadii, Sector, official_number};
use palette::Srgba;
use std::f64::consts::PI;

struct SectorRenderer<'a> {
    sector: Sector,
    model: &'a BoardModel,
    radii: &'a RingRadii,
}

impl<'a> SectorRenderer<'a> {
    fn new(sector: Sector, model: &'a BoardModel, radii: &'a RingRadii) -> Self {
        Self {
            sector,
            model,
            radii,
        }
    }

    fn state(&self) -> SectorState {
        SectorState::resolve(self.model.session.board(), self.sector)
    }

    fn draw(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let even = self.sector.is_even();
        let (base, ring) = colors.wedge(even);

        self.draw_segment(cr, self.radii.double_outer, 0.0, base)?;
        self.draw_segment(cr, self.radii.triple_outer, self.radii.triple_inner, ring)?;
        self.draw_segment(cr, self.radii.double_outer, self.radii.double_inner, ring)?;

        let label = colors.label(even);
        match self.state() {
            SectorState::Ghost => {
                self.draw_label(cr, official_number(self.sector), label, GHOST_ALPHA)
            }
            SectorState::Correct(n) | SectorState::Locked(n) | SectorState::Filled(n) => {
                self.draw_label(cr, n, label, 1.0)
            }
            SectorState::Empty => Ok(()),
        }
    }

    fn draw_segment(
        &self,
        cr: &Context,
        outer: f64,
        inner: f64,
        color: Srgba<f64>,
    ) -> Result<(), cairo::Error> {
        let b = self.sector.bounds();
        let c = self.model.center;
        set_source(cr, color, 1.0);
        cr.new_path();
        cr.arc(c.x, c.y, outer, b.start, b.end);
        cr.arc_negative(c.x, c.y, inner, b.end, b.start);
        cr.close_path();
        cr.fill()
    }

    /// Pulsing glow around a correctly filled wedge in training.
    fn draw_glow(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        if !matches!(self.state(), SectorState::Correct(_)) {
            return Ok(());
        }
        let b = self.sector.bounds();
        let c = self.model.center;
        let strength = 0.6 + 0.4 * self.model.pulse.sin();
        let width = self.model.radius * GLOW_WIDTH;

        cr.save()?;
        for layer in (1..=GLOW_LAYERS).rev() {
            let spread = width * layer as f64 / GLOW_LAYERS as f64;
            set_source(cr, colors.glow, strength / GLOW_LAYERS as f64);
            cr.set_line_width(spread);
            cr.new_path();
            cr.move_to(c.x, c.y);
            cr.arc(c.x, c.y, self.radii.outer, b.start, b.end);
            cr.close_path();
            cr.stroke()?;
        }
        cr.restore()
    }

    fn draw_label(
        &self,
        cr: &Context,
        number: DartNumber,
        color: Srgba<f64>,
        alpha: f64,
    ) -> Result<(), cairo::Error> {
        let text = number.to_string();
        let anchor = self.sector.point_at(self.model.radius * LABEL_RADIUS);
        let c = self.model.center;

        set_source(cr, color, alpha);
        cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
        cr.set_font_size(self.model.radius * FONT_SIZE);
        if let Ok(ext) = cr.text_extents(&text) {
            cr.move_to(
                c.x + anchor.x - ext.width() / 2.0 - ext.x_bearing(),
                c.y + anchor.y + ext.height() / 2.0,
            );
            cr.show_text(&text)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectorState {
    Correct(DartNumber),
    Locked(DartNumber),
    Filled(DartNumber),
    Ghost,
    Empty,
}

impl SectorState {
    /// Priority:
    /// 1. Correct (training glow)
    /// 2. Locked (hardcore confirmed)
    /// 3. Filled
    /// 4. Ghost (training hint)
    /// 5. Empty
    fn resolve(board: &Board, sector: Sector) -> Self {
        match board.get(sector) {
            Some(n) if board.is_training() && board.is_correct(sector) => Self::Correct(n),
            Some(n) if board.is_locked(sector) => Self::Locked(n),
            Some(n) => Self::Filled(n),
            None if board.is_hint_candidate(sector) => Self::Ghost,
            None => Self::Empty,
        }
    }
}

pub fn draw(cr: &Context, model: &BoardModel, colors: &ThemeColors) -> Result<(), cairo::Error> {
    let radii = RingRadii::for_radius(model.radius);

    let renderers: Vec<_> = Sector::all()
        .map(|sector| SectorRenderer::new(sector, model, &radii))
        .collect();

    // glows first: neighbouring wedges cover everything but the outer rim
    for renderer in &renderers {
        renderer.draw_glow(cr, colors)?;
    }
    for renderer in &renderers {
        renderer.draw(cr, colors)?;
    }

    draw_separators(cr, model, &radii, colors)?;
    draw_bull(cr, model, &radii, colors)
}

fn draw_separators(
    cr: &Context,
    model: &BoardModel,
    radii: &RingRadii,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    let c = model.center;
    set_source(cr, colors.separator, 1.0);
    cr.set_line_width(SEPARATOR_WIDTH);

    for r in radii.separators() {
        cr.new_path();
        cr.arc(c.x, c.y, r, 0.0, 2.0 * PI);
        cr.stroke()?;
    }

    for sector in Sector::all() {
        let edge = dartcore::Point::from_polar(sector.bounds().start, radii.outer);
        cr.new_path();
        cr.move_to(c.x, c.y);
        cr.line_to(c.x + edge.x, c.y + edge.y);
        cr.stroke()?;
    }
    Ok(())
}

fn draw_bull(
    cr: &Context,
    model: &BoardModel,
    radii: &RingRadii,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    let c = model.center;
    for (r, color) in [(radii.bull_outer, colors.green), (radii.bull_inner, colors.red)] {
        set_source(cr, color, 1.0);
        cr.new_path();
        cr.arc(c.x, c.y, r, 0.0, 2.0 * PI);
        cr.fill()?;
    }
    Ok(())
}

fn set_source(cr: &Context, color: Srgba<f64>, alpha: f64) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a * alpha);
}
