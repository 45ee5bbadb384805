//! Header and common widget rendering
//!
//! Step title, progress gauge, navigation hints, and the status line shared
//! by every wizard screen.

use ratatui::{
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::theme::Styles;
use crate::wizard::WizardStep;

/// Render the step title with the wizard progress.
pub fn render_title(f: &mut Frame, area: Rect, step: WizardStep) {
    let title = format!(
        " {} — Étape {}/{} ",
        step.title(),
        step.step_number(),
        WizardStep::TOTAL_STEPS
    );
    let widget = Paragraph::new(title)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center)
        .style(Styles::title());
    f.render_widget(widget, area);
}

/// Render the progress gauge under the title.
pub fn render_progress(f: &mut Frame, area: Rect, step: WizardStep) {
    let percent = (step.step_number() * 100 / WizardStep::TOTAL_STEPS) as u16;
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::NONE))
        .gauge_style(Styles::success())
        .percent(percent);
    f.render_widget(gauge, area);
}

/// Render the navigation hint line.
pub fn render_instructions(f: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .block(Block::default().borders(Borders::NONE))
        .alignment(Alignment::Center)
        .style(Styles::nav_hint());
    f.render_widget(widget, area);
}

/// Render the transient status line, styled by outcome.
pub fn render_status(f: &mut Frame, area: Rect, message: &str, is_error: bool) {
    let style = if is_error {
        Styles::error()
    } else {
        Styles::success()
    };
    let widget = Paragraph::new(message)
        .block(Block::default().borders(Borders::NONE))
        .alignment(Alignment::Center)
        .style(style);
    f.render_widget(widget, area);
}
