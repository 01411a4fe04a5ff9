#[cfg(test)]
mod tests {
    use sharelist::db::db::Db;
    use sharelist::db::subtasks::SubTasks;
    use sharelist::db::tasks::Tasks;
    use sharelist::db::users::Users;
    use sharelist::libs::error::AppError;
    use sharelist::libs::task::{SubTaskStatus, SUBTASKS_PER_PAGE};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct SubTaskTestContext {
        _temp_dir: TempDir,
        db: Db,
        task_id: i64,
    }

    impl TestContext for SubTaskTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::new(temp_dir.path().join("sharelist.db")).unwrap();
            let alice = Users::new(&db.conn).create("alice", "alice-password").unwrap();
            let task = Tasks::new(&db.conn).create(alice.id, "groceries").unwrap();
            SubTaskTestContext {
                _temp_dir: temp_dir,
                db,
                task_id: task.id,
            }
        }
    }

    #[test_context(SubTaskTestContext)]
    #[test]
    fn test_create_subtask_defaults_to_open(ctx: &mut SubTaskTestContext) {
        let subtasks = SubTasks::new(&ctx.db.conn);

        let subtask = subtasks.create(ctx.task_id, "milk").unwrap();
        assert_eq!(subtask.title, "milk");
        assert_eq!(subtask.status, SubTaskStatus::Open);
        assert_eq!(subtask.task_id, ctx.task_id);

        let flag: i64 = ctx
            .db
            .conn
            .query_row("SELECT status FROM subtasks WHERE id = ?1", [subtask.id], |row| row.get(0))
            .unwrap();
        assert_eq!(flag, 1);
    }

    #[test_context(SubTaskTestContext)]
    #[test]
    fn test_create_subtask_validation(ctx: &mut SubTaskTestContext) {
        let subtasks = SubTasks::new(&ctx.db.conn);

        assert!(matches!(subtasks.create(ctx.task_id, ""), Err(AppError::Validation(_))));
        assert!(matches!(subtasks.create(ctx.task_id, &"y".repeat(26)), Err(AppError::Validation(_))));
        assert!(subtasks.create(ctx.task_id, &"y".repeat(25)).is_ok());
        assert_eq!(subtasks.count(ctx.task_id).unwrap(), 1);
    }

    #[test_context(SubTaskTestContext)]
    #[test]
    fn test_create_subtask_for_missing_task(ctx: &mut SubTaskTestContext) {
        let subtasks = SubTasks::new(&ctx.db.conn);

        let result = subtasks.create(9999, "milk");
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test_context(SubTaskTestContext)]
    #[test]
    fn test_pagination_seven_per_page(ctx: &mut SubTaskTestContext) {
        let subtasks = SubTasks::new(&ctx.db.conn);
        for i in 1..=10 {
            subtasks.create(ctx.task_id, &format!("item {}", i)).unwrap();
        }

        let first = subtasks.list(ctx.task_id, 1, SUBTASKS_PER_PAGE).unwrap();
        assert_eq!(first.items.len(), 7);
        assert_eq!(first.items[0].title, "item 1");
        assert_eq!(first.total, 10);
        assert_eq!(first.pages, 2);
        assert!(!first.has_prev());
        assert_eq!(first.next_num(), Some(2));

        let second = subtasks.list(ctx.task_id, 2, SUBTASKS_PER_PAGE).unwrap();
        let titles: Vec<&str> = second.items.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["item 8", "item 9", "item 10"]);
        assert_eq!(second.prev_num(), Some(1));
        assert!(!second.has_next());

        // Past the end is an empty page, not an error
        let third = subtasks.list(ctx.task_id, 3, SUBTASKS_PER_PAGE).unwrap();
        assert!(third.items.is_empty());

        // Page zero reads as the first page
        let zero = subtasks.list(ctx.task_id, 0, SUBTASKS_PER_PAGE).unwrap();
        assert_eq!(zero.page, 1);
        assert_eq!(zero.items.len(), 7);
    }

    #[test_context(SubTaskTestContext)]
    #[test]
    fn test_last_page(ctx: &mut SubTaskTestContext) {
        let subtasks = SubTasks::new(&ctx.db.conn);
        assert_eq!(subtasks.last_page(ctx.task_id, SUBTASKS_PER_PAGE).unwrap(), 1);

        for i in 1..=7 {
            subtasks.create(ctx.task_id, &format!("item {}", i)).unwrap();
        }
        assert_eq!(subtasks.last_page(ctx.task_id, SUBTASKS_PER_PAGE).unwrap(), 1);

        subtasks.create(ctx.task_id, "item 8").unwrap();
        assert_eq!(subtasks.last_page(ctx.task_id, SUBTASKS_PER_PAGE).unwrap(), 2);
    }

    #[test_context(SubTaskTestContext)]
    #[test]
    fn test_edit_subtask_round_trip(ctx: &mut SubTaskTestContext) {
        let subtasks = SubTasks::new(&ctx.db.conn);
        let subtask = subtasks.create(ctx.task_id, "buy milk").unwrap();

        let changed = subtasks.edit(subtask.id, "buy oat milk", SubTaskStatus::Done).unwrap();
        assert_eq!(changed, 1);

        let page = subtasks.list(ctx.task_id, 1, SUBTASKS_PER_PAGE).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].title, "buy oat milk");
        assert_eq!(page.items[0].status, SubTaskStatus::Done);
    }

    #[test_context(SubTaskTestContext)]
    #[test]
    fn test_edit_subtask_validates_title(ctx: &mut SubTaskTestContext) {
        let subtasks = SubTasks::new(&ctx.db.conn);
        let subtask = subtasks.create(ctx.task_id, "buy milk").unwrap();

        let result = subtasks.edit(subtask.id, "", SubTaskStatus::Done);
        assert!(matches!(result, Err(AppError::Validation(_))));

        let unchanged = subtasks.get(subtask.id).unwrap().unwrap();
        assert_eq!(unchanged.title, "buy milk");
        assert_eq!(unchanged.status, SubTaskStatus::Open);
    }

    #[test_context(SubTaskTestContext)]
    #[test]
    fn test_missing_subtask_is_noop(ctx: &mut SubTaskTestContext) {
        let subtasks = SubTasks::new(&ctx.db.conn);

        subtasks.delete(9999).unwrap();
        assert_eq!(subtasks.edit(9999, "anything", SubTaskStatus::Done).unwrap(), 0);
    }

    #[test_context(SubTaskTestContext)]
    #[test]
    fn test_delete_subtask(ctx: &mut SubTaskTestContext) {
        let subtasks = SubTasks::new(&ctx.db.conn);
        let keep = subtasks.create(ctx.task_id, "milk").unwrap();
        let removed = subtasks.create(ctx.task_id, "bread").unwrap();

        subtasks.delete(removed.id).unwrap();

        assert!(subtasks.get(removed.id).unwrap().is_none());
        assert!(subtasks.get(keep.id).unwrap().is_some());
        assert_eq!(subtasks.count(ctx.task_id).unwrap(), 1);
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("1".parse::<SubTaskStatus>().unwrap(), SubTaskStatus::Open);
        assert_eq!("0".parse::<SubTaskStatus>().unwrap(), SubTaskStatus::Done);
        assert_eq!("Done".parse::<SubTaskStatus>().unwrap(), SubTaskStatus::Done);
        assert!(matches!("maybe".parse::<SubTaskStatus>(), Err(AppError::Validation(_))));
    }
}
