//! Wizard screen rendering
//!
//! One render function per wizard step. Screens are pure: they read
//! [`AppState`] and draw, all mutation happens in key handling.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use strum::IntoEnumIterator;

use crate::app::AppState;
use crate::catalog::CatalogEntry;
use crate::input::TextField;
use crate::pricing;
use crate::theme::Styles;
use crate::types::{PaymentFrequency, PaymentMethod};

fn labeled_field(
    f: &mut Frame,
    area: Rect,
    label: &str,
    field: &TextField,
    focused: bool,
) {
    let border = if focused {
        Styles::border_active()
    } else {
        Styles::border_inactive()
    };
    let widget = Paragraph::new(field.value()).style(Styles::text()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(label)
            .border_style(border),
    );
    f.render_widget(widget, area);

    if focused {
        // Place the terminal cursor inside the focused field
        f.set_cursor_position((area.x + 1 + field.cursor() as u16, area.y + 1));
    }
}

fn price_line(entry: &CatalogEntry, state: &AppState) -> String {
    if entry.is_free() {
        "Gratuit".to_string()
    } else {
        format!(
            "{} {}",
            entry.price_in(state.form.currency),
            state.form.currency.code()
        )
    }
}

/// Contact step: name, country code, phone, email, currency zone.
pub fn render_contact(f: &mut Frame, area: Rect, state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    labeled_field(f, rows[0], "Nom / Groupe", &state.name_field, state.contact_focus == 0);
    labeled_field(f, rows[1], "Indicatif", &state.country_field, state.contact_focus == 1);
    labeled_field(f, rows[2], "Téléphone", &state.phone_field, state.contact_focus == 2);
    labeled_field(f, rows[3], "Email", &state.email_field, state.contact_focus == 3);

    let zone_focused = state.contact_focus == 4;
    let zone = Paragraph::new(state.form.currency.label())
        .style(if zone_focused {
            Styles::focused()
        } else {
            Styles::text()
        })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Zone / Devise")
                .border_style(if zone_focused {
                    Styles::border_active()
                } else {
                    Styles::border_inactive()
                }),
        );
    f.render_widget(zone, rows[4]);
}

/// Primary pack step: single-select list with prices.
pub fn render_pack_select(f: &mut Frame, area: Rect, state: &AppState) {
    let items: Vec<ListItem> = state
        .catalog
        .primary_packs
        .iter()
        .map(|pack| {
            let marker = if state.form.selected_pack.as_deref() == Some(pack.id.as_str()) {
                "(x)"
            } else {
                "( )"
            };
            let suffix = if pack.recurring { " / période" } else { "" };
            ListItem::new(vec![
                Line::from(vec![
                    Span::raw(format!("{} {} — ", marker, pack.name)),
                    Span::styled(format!("{}{}", price_line(pack, state), suffix), Styles::amount()),
                ]),
                Line::from(Span::styled(
                    format!("     {}", pack.description),
                    Styles::text_muted(),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Packs"))
        .highlight_style(Styles::selected());

    let mut list_state = ListState::default();
    list_state.select(Some(state.pack_cursor));
    f.render_stateful_widget(list, area, &mut list_state);
}

/// Accompaniment step: quantity per pack.
pub fn render_accompaniment(f: &mut Frame, area: Rect, state: &AppState) {
    let items: Vec<ListItem> = state
        .catalog
        .accompaniment_packs
        .iter()
        .map(|pack| {
            let quantity = state.form.quantity(&pack.id);
            let quantity_style = if quantity > 0 {
                Styles::amount()
            } else {
                Styles::text_muted()
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!("[{:>2}] ", quantity), quantity_style),
                    Span::raw(format!("{} — ", pack.name)),
                    Span::styled(format!("{} / chant", price_line(pack, state)), Styles::amount()),
                ]),
                Line::from(Span::styled(
                    format!("      {}", pack.description),
                    Styles::text_muted(),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Accompagnement"))
        .highlight_style(Styles::selected());

    let mut list_state = ListState::default();
    list_state.select(Some(state.accompaniment_cursor));
    f.render_stateful_widget(list, area, &mut list_state);
}

/// Payment step: frequency selector plus method list.
pub fn render_payment(f: &mut Frame, area: Rect, state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    let frequency_line = Line::from(
        PaymentFrequency::iter()
            .flat_map(|freq| {
                let style = if freq == state.form.frequency {
                    Styles::selected()
                } else {
                    Styles::unselected()
                };
                vec![Span::styled(format!(" {} ", freq.label()), style), Span::raw(" ")]
            })
            .collect::<Vec<_>>(),
    );
    let frequency = Paragraph::new(frequency_line).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Fréquence de paiement")
            .border_style(if state.payment_focus == 0 {
                Styles::border_active()
            } else {
                Styles::border_inactive()
            }),
    );
    f.render_widget(frequency, rows[0]);

    let items: Vec<ListItem> = PaymentMethod::iter()
        .map(|method| {
            let marker = if state.form.method == Some(method) {
                "(x)"
            } else {
                "( )"
            };
            ListItem::new(format!("{} {}", marker, method.label()))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Moyen de paiement")
                .border_style(if state.payment_focus == 1 {
                    Styles::border_active()
                } else {
                    Styles::border_inactive()
                }),
        )
        .highlight_style(Styles::selected());

    let mut list_state = ListState::default();
    list_state.select(Some(state.method_cursor));
    f.render_stateful_widget(list, rows[1], &mut list_state);
}

/// Comments step: free text.
pub fn render_comments(f: &mut Frame, area: Rect, state: &AppState) {
    labeled_field(f, area, "Commentaires (optionnel)", &state.comments_field, true);
}

/// Review step: full order summary with totals.
pub fn render_review(f: &mut Frame, area: Rect, state: &AppState) {
    let totals = pricing::calculate(&state.form, &state.catalog);
    let currency = state.form.currency.code();

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Nom : ", Styles::text_muted()),
            Span::raw(state.form.name.clone()),
        ]),
        Line::from(vec![
            Span::styled("Téléphone : ", Styles::text_muted()),
            Span::raw(state.form.full_phone()),
        ]),
        Line::from(vec![
            Span::styled("Email : ", Styles::text_muted()),
            Span::raw(state.form.email.clone()),
        ]),
        Line::from(""),
    ];

    if let Some(pack) = state
        .form
        .selected_pack
        .as_deref()
        .and_then(|id| state.catalog.primary(id))
    {
        lines.push(Line::from(vec![
            Span::styled("Pack principal : ", Styles::text_muted()),
            Span::raw(pack.name.clone()),
            Span::raw("  "),
            Span::styled(format!("{} {}", totals.primary_total, currency), Styles::amount()),
        ]));
        if pack.recurring {
            lines.push(Line::from(Span::styled(
                format!("  Fréquence : {}", state.form.frequency.label()),
                Styles::text_muted(),
            )));
        }
    }

    let accompaniments = state.form.selected_accompaniments(&state.catalog);
    if !accompaniments.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Packs d'accompagnement :",
            Styles::text_muted(),
        )));
        for (entry, quantity) in &accompaniments {
            lines.push(Line::from(format!(
                "  {} x{} — {} {}",
                entry.name,
                quantity,
                entry.price_in(state.form.currency) * u64::from(*quantity),
                currency
            )));
        }
        lines.push(Line::from(vec![
            Span::styled("Sous-total accompagnement : ", Styles::text_muted()),
            Span::styled(
                format!("{} {}", totals.accompaniment_total, currency),
                Styles::amount(),
            ),
        ]));
    }

    if let Some(method) = state.form.method {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Paiement : ", Styles::text_muted()),
            Span::raw(method.label()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("TOTAL : ", Styles::title()),
        Span::styled(format!("{} {}", totals.grand_total, currency), Styles::amount()),
    ]));

    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Récapitulatif"))
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}

/// Done step: confirmation summary after a recorded order.
pub fn render_done(f: &mut Frame, area: Rect, state: &AppState) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Votre commande a été enregistrée avec succès !",
            Styles::success(),
        )),
        Line::from(""),
    ];

    if let Some(summary) = &state.confirmation {
        lines.push(Line::from(vec![
            Span::styled("Référence : ", Styles::text_muted()),
            Span::raw(summary.reference.clone()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Pack : ", Styles::text_muted()),
            Span::raw(summary.pack_name.clone()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Fréquence : ", Styles::text_muted()),
            Span::raw(summary.frequency_label),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Pack principal : ", Styles::text_muted()),
            Span::styled(
                format!("{} {}", summary.totals.primary_total, summary.currency_label),
                Styles::amount(),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Accompagnement : ", Styles::text_muted()),
            Span::styled(
                format!(
                    "{} {}",
                    summary.totals.accompaniment_total, summary.currency_label
                ),
                Styles::amount(),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled("TOTAL : ", Styles::title()),
            Span::styled(
                format!("{} {}", summary.totals.grand_total, summary.currency_label),
                Styles::amount(),
            ),
        ]));

        if summary.email_sent {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Un email de confirmation vous a été envoyé.",
                Styles::text_muted(),
            )));
        }
    }

    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Confirmation"))
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}
