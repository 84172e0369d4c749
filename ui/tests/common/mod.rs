use egui_kittest::Harness;
use members_business::{Member, MembersState};
use members_ui::state::State;
use members_ui::widgets::members_panel;

/// `count` members named "Member 1".."Member {count}"; every third one is an admin.
#[allow(unused)]
pub fn sample_members(count: usize) -> Vec<Member> {
    (1..=count)
        .map(|i| {
            Member::new(
                i.to_string(),
                format!("Member {i}"),
                format!("member{i}@mailinator.com"),
                if i % 3 == 0 { "admin" } else { "member" },
            )
        })
        .collect()
}

/// State with `members` already loaded. The URL is never fetched.
#[allow(unused)]
pub fn loaded_state(members: Vec<Member>) -> State {
    let mut state = State::test("http://127.0.0.1:9/members.json".to_owned());
    state
        .ctx
        .update::<MembersState>(|members_state| members_state.replace_members(members));
    state
}

/// Harness running one app frame: sync, panel, recompute.
#[allow(unused)]
pub fn panel_harness<'a>(state: State) -> Harness<'a, State> {
    let mut harness = Harness::new_ui_state(
        |ui, state: &mut State| {
            state.ctx.sync_computes();
            members_panel(&mut state.ctx, ui);
            state.ctx.run_computed();
        },
        state,
    );
    settle(&mut harness);
    harness
}

/// Run enough frames for a dispatched command to show up in the view.
#[allow(unused)]
pub fn settle(harness: &mut Harness<'_, State>) {
    for _ in 0..3 {
        harness.step();
    }
}
