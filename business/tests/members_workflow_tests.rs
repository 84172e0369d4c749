//! End-to-end tests of the members workflow through `StateCtx`, the way the
//! UI drives it: fill `MembersInput`, dispatch, read `MembersViewCompute`.

use members_business::{
    BeginEditMemberCommand, BusinessConfig, ChangePageCommand, CommitEditMemberCommand,
    DeleteMemberCommand, EditField, Member, MemberId, MembersInput, MembersState, MembersView,
    MembersViewCompute, SearchMembersCommand, ToggleAllOnPageCommand, register_members,
};
use members_states::StateCtx;

fn setup_ctx(members: Vec<Member>) -> StateCtx {
    let mut ctx = StateCtx::new();
    register_members(&mut ctx, BusinessConfig::default());
    ctx.update::<MembersState>(|state| state.replace_members(members));
    ctx
}

fn view(ctx: &mut StateCtx) -> MembersView {
    ctx.run_computed();
    ctx.sync_computes();
    ctx.cached::<MembersViewCompute>()
        .map(|compute| compute.view.clone())
        .unwrap_or_default()
}

fn search(ctx: &mut StateCtx, term: &str) {
    let term = term.to_owned();
    ctx.update::<MembersInput>(|input| input.search_term = Some(term));
    ctx.dispatch::<SearchMembersCommand>();
}

fn target(ctx: &mut StateCtx, id: &str) {
    let id = MemberId::from(id);
    ctx.update::<MembersInput>(|input| input.target = Some(id));
}

fn roster(count: usize) -> Vec<Member> {
    (1..=count)
        .map(|i| {
            Member::new(
                i.to_string(),
                format!("Member {i}"),
                format!("member{i}@mailinator.com"),
                if i <= 2 { "admin" } else { "member" },
            )
        })
        .collect()
}

#[test]
fn test_last_page_button_matches_explicit_page() {
    let mut ctx = setup_ctx(roster(25));

    let last = view(&mut ctx).total_pages.max(1);
    ctx.update::<MembersInput>(|input| input.page = Some(last));
    ctx.dispatch::<ChangePageCommand>();
    let via_last = view(&mut ctx);

    ctx.update::<MembersInput>(|input| input.page = Some(3));
    ctx.dispatch::<ChangePageCommand>();
    let via_three = view(&mut ctx);

    assert_eq!(via_last, via_three);
    assert_eq!(via_three.rows.len(), 5);
}

#[test]
fn test_select_page_search_and_delete() {
    let mut ctx = setup_ctx(roster(25));

    ctx.dispatch::<ToggleAllOnPageCommand>();
    let page_one = view(&mut ctx);
    assert!(page_one.all_page_rows_selected);
    assert_eq!(page_one.selected_count, 10);

    search(&mut ctx, "admin");
    let admins = view(&mut ctx);
    assert_eq!(admins.effective_len, 2);
    assert!(admins.all_page_rows_selected);

    // Deleting one row drops the whole selection and the search.
    target(&mut ctx, "1");
    ctx.dispatch::<DeleteMemberCommand>();
    let after = view(&mut ctx);
    assert_eq!(after.effective_len, 24);
    assert_eq!(after.selected_count, 0);
    assert_eq!(after.page, 1);
    assert_eq!(ctx.state::<MembersState>().search_term(), "");
}

#[test]
fn test_edit_is_visible_in_the_next_view() {
    let mut ctx = setup_ctx(roster(3));

    target(&mut ctx, "3");
    ctx.dispatch::<BeginEditMemberCommand>();
    ctx.update::<MembersState>(|state| state.edit_field(EditField::Email, "three@x.com"));
    ctx.dispatch::<CommitEditMemberCommand>();

    let rows = view(&mut ctx).rows;
    assert_eq!(
        rows[2],
        Member::new("3", "Member 3", "three@x.com", "member")
    );
}
