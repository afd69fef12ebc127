/// Tab bar, option list and status line below the viewport
use std::io::Write;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
    QueueableCommand,
};
use pc3d_core::{
    button_style, categories, tab_trigger_style, ButtonVariant, Interaction, RenderParams, Session,
};

use crate::renderer::to_terminal_color;

/// Queue the configuration card starting at terminal row `top`
pub fn draw_panel<W: Write>(writer: &mut W, session: &Session, top: u16) -> std::io::Result<()> {
    let mut row = top;

    // Tab bar
    writer.queue(cursor::MoveTo(0, row))?;
    writer.queue(Clear(ClearType::CurrentLine))?;
    for &category in categories() {
        let style = tab_trigger_style(session.tabs().is_active(category));
        writer.queue(SetForegroundColor(to_terminal_color(style.foreground)))?;
        if style.underline.is_some() {
            writer.queue(SetAttribute(Attribute::Underlined))?;
        }
        writer.queue(Print(format!(" {} ", category.title())))?;
        writer.queue(SetAttribute(Attribute::Reset))?;
        writer.queue(Print(" "))?;
    }
    writer.queue(ResetColor)?;
    row += 1;

    writer.queue(cursor::MoveTo(0, row))?;
    writer.queue(Clear(ClearType::CurrentLine))?;
    row += 1;

    // Options of the visible tab, one per row
    let panel = session.panel();
    for slot in 0..4 {
        writer.queue(cursor::MoveTo(0, row))?;
        writer.queue(Clear(ClearType::CurrentLine))?;
        if let Some(entry) = panel.get(slot) {
            let style = button_style(ButtonVariant::for_selection(entry.selected), Interaction::Enabled);
            if let Some(background) = style.background {
                writer.queue(SetBackgroundColor(to_terminal_color(background)))?;
            }
            writer.queue(SetForegroundColor(to_terminal_color(style.foreground)))?;
            let marker = if entry.selected { '●' } else { ' ' };
            writer.queue(Print(format!(" {} {} {:<8}", slot + 1, marker, entry.option.label)))?;
            writer.queue(ResetColor)?;
            writer.queue(Print(format!("  {}", entry.option.description)))?;
        }
        row += 1;
    }

    writer.queue(cursor::MoveTo(0, row))?;
    writer.queue(Clear(ClearType::CurrentLine))?;
    writer.queue(Print(status_line(&session.render_params())))?;
    Ok(())
}

pub fn status_line(params: &RenderParams) -> String {
    format!(
        "scale {:.2} | metalness {:.2} | roughness {:.2} | color {}",
        params.scale, params.metalness, params.roughness, params.base_color
    )
}
