#[cfg(test)]
mod tests {
    use sharelist::db::db::Db;
    use sharelist::db::subtasks::SubTasks;
    use sharelist::db::tasks::Tasks;
    use sharelist::db::users::{User, Users};
    use sharelist::libs::dashboard::{DashAction, Dashboard, Outcome};
    use sharelist::libs::error::AppError;
    use sharelist::libs::messages::Message;
    use sharelist::libs::session::Selection;
    use sharelist::libs::task::SubTaskStatus;
    use sharelist::libs::view::DashView;
    use std::collections::HashMap;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct DashboardTestContext {
        _temp_dir: TempDir,
        db: Db,
        alice: User,
        bob: User,
    }

    impl TestContext for DashboardTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::new(temp_dir.path().join("sharelist.db")).unwrap();
            let users = Users::new(&db.conn);
            let alice = users.create("alice", "alice-password").unwrap();
            let bob = users.create("bob", "bob-password").unwrap();
            DashboardTestContext {
                _temp_dir: temp_dir,
                db,
                alice,
                bob,
            }
        }
    }

    impl DashboardTestContext {
        fn dashboard(&self, user: &User) -> Dashboard<'_> {
            Dashboard::new(&self.db.conn, user.id, "test")
        }
    }

    fn form(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn rendered(outcome: Outcome) -> DashView {
        match outcome {
            Outcome::Render(view) => view,
            Outcome::Redirect => panic!("expected a rendered dashboard"),
        }
    }

    #[test]
    fn test_action_priority() {
        let action = DashAction::from_form(&form(&[("add_task", "x"), ("taskList", "3")])).unwrap();
        assert_eq!(action, DashAction::SelectTask(3));

        let action = DashAction::from_form(&form(&[("add_assignee", "bob"), ("remove_task", "")])).unwrap();
        assert_eq!(action, DashAction::RemoveTask);

        assert_eq!(DashAction::from_form(&form(&[])).unwrap(), DashAction::Render);
    }

    #[test]
    fn test_action_companion_fields() {
        let action = DashAction::from_form(&form(&[("edit_subTask", "oat milk"), ("id_subTask", "4"), ("subTask_state", "0")])).unwrap();
        assert_eq!(
            action,
            DashAction::EditSubTask {
                id: 4,
                title: "oat milk".to_string(),
                status: SubTaskStatus::Done,
            }
        );

        let missing = DashAction::from_form(&form(&[("remove_subTask", "")]));
        assert!(matches!(missing, Err(AppError::Validation(Message::MissingFormField(_)))));

        let garbled = DashAction::from_form(&form(&[("taskList", "abc")]));
        assert!(matches!(garbled, Err(AppError::Validation(Message::InvalidFormField(_)))));
    }

    #[test_context(DashboardTestContext)]
    #[test]
    fn test_open_resets_selection(ctx: &mut DashboardTestContext) {
        Tasks::new(&ctx.db.conn).create(ctx.alice.id, "groceries").unwrap();

        let (view, selection) = ctx.dashboard(&ctx.alice).open().unwrap();
        assert_eq!(selection, Selection::default());
        assert_eq!(view.tasks.len(), 1);
        assert!(view.task.is_none());
        assert!(view.subtasks.is_none());
    }

    #[test_context(DashboardTestContext)]
    #[test]
    fn test_add_task_selects_it(ctx: &mut DashboardTestContext) {
        let dashboard = ctx.dashboard(&ctx.alice);

        let (outcome, selection) = dashboard.handle_form(Selection::default(), &form(&[("add_task", "groceries")])).unwrap();
        let view = rendered(outcome);

        let task = view.task.unwrap();
        assert_eq!(task.task.title, "groceries");
        assert_eq!(task.assignees, vec!["alice".to_string()]);
        assert_eq!(selection, Selection { task_id: Some(task.task.id), page: 1 });
        assert!(view.message.is_none());
    }

    #[test_context(DashboardTestContext)]
    #[test]
    fn test_invalid_task_title_becomes_message(ctx: &mut DashboardTestContext) {
        let dashboard = ctx.dashboard(&ctx.alice);

        let (outcome, selection) = dashboard.handle_form(Selection::default(), &form(&[("add_task", "")])).unwrap();
        let view = rendered(outcome);

        assert_eq!(view.message, Some(Message::InvalidTitle.to_string()));
        assert_eq!(selection, Selection::default());
        assert!(view.tasks.is_empty());
    }

    #[test_context(DashboardTestContext)]
    #[test]
    fn test_duplicate_task_becomes_message(ctx: &mut DashboardTestContext) {
        Tasks::new(&ctx.db.conn).create(ctx.bob.id, "groceries").unwrap();

        let (outcome, _) = ctx
            .dashboard(&ctx.alice)
            .handle_form(Selection::default(), &form(&[("add_task", "groceries")]))
            .unwrap();

        assert_eq!(rendered(outcome).message, Some(Message::TaskAlreadyExists.to_string()));
    }

    #[test_context(DashboardTestContext)]
    #[test]
    fn test_add_subtask_needs_selection(ctx: &mut DashboardTestContext) {
        let (outcome, _) = ctx
            .dashboard(&ctx.alice)
            .handle_form(Selection::default(), &form(&[("add_subTask", "milk")]))
            .unwrap();

        assert_eq!(rendered(outcome).message, Some(Message::NoTaskSelected.to_string()));
    }

    #[test_context(DashboardTestContext)]
    #[test]
    fn test_add_subtask_moves_to_last_page(ctx: &mut DashboardTestContext) {
        let task = Tasks::new(&ctx.db.conn).create(ctx.alice.id, "groceries").unwrap();
        let subtasks = SubTasks::new(&ctx.db.conn);
        for i in 1..=7 {
            subtasks.create(task.id, &format!("item {}", i)).unwrap();
        }

        let selection = Selection { task_id: Some(task.id), page: 1 };
        let (outcome, selection) = ctx.dashboard(&ctx.alice).handle_form(selection, &form(&[("add_subTask", "item 8")])).unwrap();
        let view = rendered(outcome);

        assert_eq!(selection.page, 2);
        let page = view.subtasks.unwrap();
        assert_eq!(page.page, 2);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].title, "item 8");
    }

    #[test_context(DashboardTestContext)]
    #[test]
    fn test_paging_keeps_task(ctx: &mut DashboardTestContext) {
        let task = Tasks::new(&ctx.db.conn).create(ctx.alice.id, "groceries").unwrap();
        let selection = Selection { task_id: Some(task.id), page: 1 };

        let (_, selection) = ctx.dashboard(&ctx.alice).handle_form(selection, &form(&[("nextPage", "2")])).unwrap();
        assert_eq!(selection, Selection { task_id: Some(task.id), page: 2 });

        let (_, selection) = ctx.dashboard(&ctx.alice).handle_form(selection, &form(&[("prevPage", "1")])).unwrap();
        assert_eq!(selection, Selection { task_id: Some(task.id), page: 1 });
    }

    #[test_context(DashboardTestContext)]
    #[test]
    fn test_edit_and_remove_subtask(ctx: &mut DashboardTestContext) {
        let task = Tasks::new(&ctx.db.conn).create(ctx.alice.id, "groceries").unwrap();
        let subtask = SubTasks::new(&ctx.db.conn).create(task.id, "buy milk").unwrap();
        let selection = Selection { task_id: Some(task.id), page: 1 };
        let id = subtask.id.to_string();

        let (outcome, _) = ctx
            .dashboard(&ctx.alice)
            .handle_form(
                selection,
                &form(&[("edit_subTask", "buy oat milk"), ("id_subTask", id.as_str()), ("subTask_state", "0")]),
            )
            .unwrap();
        let page = rendered(outcome).subtasks.unwrap();
        assert_eq!(page.items[0].title, "buy oat milk");
        assert_eq!(page.items[0].status, SubTaskStatus::Done);

        let (outcome, _) = ctx
            .dashboard(&ctx.alice)
            .handle_form(selection, &form(&[("remove_subTask", ""), ("id_subTask", id.as_str())]))
            .unwrap();
        assert!(rendered(outcome).subtasks.unwrap().items.is_empty());
    }

    #[test_context(DashboardTestContext)]
    #[test]
    fn test_foreign_subtask_is_untouched(ctx: &mut DashboardTestContext) {
        let task = Tasks::new(&ctx.db.conn).create(ctx.bob.id, "bob's list").unwrap();
        let subtask = SubTasks::new(&ctx.db.conn).create(task.id, "secret").unwrap();
        let id = subtask.id.to_string();

        let (outcome, _) = ctx
            .dashboard(&ctx.alice)
            .handle_form(Selection::default(), &form(&[("remove_subTask", ""), ("id_subTask", id.as_str())]))
            .unwrap();

        assert!(rendered(outcome).message.is_some());
        assert!(SubTasks::new(&ctx.db.conn).get(subtask.id).unwrap().is_some());
    }

    #[test_context(DashboardTestContext)]
    #[test]
    fn test_remove_task_redirects(ctx: &mut DashboardTestContext) {
        let task = Tasks::new(&ctx.db.conn).create(ctx.alice.id, "groceries").unwrap();
        let selection = Selection { task_id: Some(task.id), page: 1 };

        let (outcome, selection) = ctx.dashboard(&ctx.alice).handle_form(selection, &form(&[("remove_task", "")])).unwrap();

        assert_eq!(outcome, Outcome::Redirect);
        assert_eq!(selection, Selection::default());
        assert!(Tasks::new(&ctx.db.conn).get(task.id).unwrap().is_none());
    }

    #[test_context(DashboardTestContext)]
    #[test]
    fn test_cannot_select_foreign_task(ctx: &mut DashboardTestContext) {
        let task = Tasks::new(&ctx.db.conn).create(ctx.bob.id, "bob's list").unwrap();

        let id = task.id.to_string();
        let (outcome, selection) = ctx
            .dashboard(&ctx.alice)
            .handle_form(Selection::default(), &form(&[("taskList", id.as_str())]))
            .unwrap();

        assert_eq!(rendered(outcome).message, Some(Message::TaskNotFound(task.id).to_string()));
        assert_eq!(selection, Selection::default());
    }

    #[test_context(DashboardTestContext)]
    #[test]
    fn test_add_assignee_messages(ctx: &mut DashboardTestContext) {
        let task = Tasks::new(&ctx.db.conn).create(ctx.alice.id, "groceries").unwrap();
        let selection = Selection { task_id: Some(task.id), page: 1 };

        let (outcome, _) = ctx.dashboard(&ctx.alice).handle_form(selection, &form(&[("add_assignee", "carol")])).unwrap();
        assert_eq!(rendered(outcome).message, Some("User does not exist".to_string()));

        let (outcome, _) = ctx.dashboard(&ctx.alice).handle_form(selection, &form(&[("add_assignee", "bob")])).unwrap();
        let view = rendered(outcome);
        assert_eq!(view.message, Some("User added".to_string()));
        assert_eq!(view.task.unwrap().assignees, vec!["alice".to_string(), "bob".to_string()]);

        // Bob now sees the task on his own dashboard
        let (view, _) = ctx.dashboard(&ctx.bob).open().unwrap();
        assert_eq!(view.tasks.len(), 1);
    }
}
