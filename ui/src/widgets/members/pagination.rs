//! Footer of the members table: bulk delete and page navigation.

use egui::{Button, Color32, RichText, Ui};
use members_business::{MembersLoadCompute, MembersView};
use members_states::StateCtx;

use super::panel::{trigger_change_page, trigger_delete_selected};

const DELETE_FILL: Color32 = Color32::from_rgb(220, 53, 69);

/// Most page slots drawn between the first/last buttons, gaps included.
const PAGE_SLOTS: usize = 7;

enum FooterAction {
    DeleteSelected,
    ChangePage(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageItem {
    Page(usize),
    Gap,
}

/// Page buttons to draw: every page when they fit, otherwise the first and
/// last page around a run of three, with gaps for the skipped ranges.
fn page_items(current: usize, total: usize) -> Vec<PageItem> {
    if total <= PAGE_SLOTS {
        return (1..=total).map(PageItem::Page).collect();
    }

    let current = current.clamp(1, total);
    let (start, end) = if current <= 4 {
        (2, 5)
    } else if current >= total - 3 {
        (total - 4, total - 1)
    } else {
        (current - 1, current + 1)
    };

    let mut items = vec![PageItem::Page(1)];
    if start > 2 {
        items.push(PageItem::Gap);
    }
    items.extend((start..=end).map(PageItem::Page));
    if end < total - 1 {
        items.push(PageItem::Gap);
    }
    items.push(PageItem::Page(total));
    items
}

/// Renders "Delete Selected", then first / numbered / last page buttons and
/// the row count.
pub fn render_pagination(state_ctx: &mut StateCtx, ui: &mut Ui, view: &MembersView) {
    let mut action = None;
    // An empty table still routes "last page" to page 1.
    let last_page = view.total_pages.max(1);
    let loaded = state_ctx
        .cached::<MembersLoadCompute>()
        .and_then(MembersLoadCompute::loaded_summary);

    ui.horizontal(|ui| {
        let delete = Button::new(RichText::new("Delete Selected").color(Color32::WHITE))
            .fill(DELETE_FILL)
            .corner_radius(12.0);
        if ui
            .add(delete)
            .on_hover_text(format!("{} selected", view.selected_count))
            .clicked()
        {
            action = Some(FooterAction::DeleteSelected);
        }

        ui.add_space(24.0);

        if ui.button("go to first page").clicked() {
            action = Some(FooterAction::ChangePage(1));
        }
        for item in page_items(view.page, view.total_pages) {
            match item {
                PageItem::Page(page) => {
                    if ui
                        .selectable_label(page == view.page, page.to_string())
                        .clicked()
                    {
                        action = Some(FooterAction::ChangePage(page));
                    }
                }
                PageItem::Gap => {
                    ui.weak("…");
                }
            }
        }
        if ui.button("go to last page").clicked() {
            action = Some(FooterAction::ChangePage(last_page));
        }

        ui.add_space(24.0);

        let total = ui.weak(format!("{} members", view.effective_len));
        if let Some(loaded) = loaded {
            total.on_hover_text(loaded);
        }
    });

    match action {
        Some(FooterAction::DeleteSelected) => trigger_delete_selected(state_ctx),
        Some(FooterAction::ChangePage(page)) => trigger_change_page(state_ctx, page),
        None => return,
    }
    ui.ctx().request_repaint();
}
