#[cfg(test)]
mod tests {
    use chrono::Local;
    use taskmate::libs::filter::{due_bucket, SortField, SortOrder, StatusFilter, TaskFilter};
    use taskmate::libs::task::Priority;

    #[test]
    fn test_no_selections_yields_no_query_pairs() {
        let filter = TaskFilter::default();
        assert!(filter.to_query().is_empty());
        assert!(filter.is_empty());
    }

    #[test]
    fn test_single_status_selection_yields_one_pair() {
        let filter = TaskFilter {
            status: Some(StatusFilter::Completed),
            ..Default::default()
        };
        let query = filter.to_query();
        assert_eq!(query.len(), 1);
        assert_eq!(query[0], ("status", "completed".to_string()));
    }

    #[test]
    fn test_empty_strings_are_omitted_not_sent() {
        let filter = TaskFilter {
            search: Some(String::new()),
            due_date: Some(String::new()),
            ..Default::default()
        };
        assert!(filter.to_query().is_empty());
    }

    #[test]
    fn test_all_selections_serialize_with_expected_keys() {
        let filter = TaskFilter {
            search: Some("report".to_string()),
            status: Some(StatusFilter::Pending),
            priority: Some(Priority::High),
            due_date: Some("before:2026-01-01".to_string()),
            sort_by: Some(SortField::DueDate),
            sort_order: Some(SortOrder::Desc),
        };
        let query = filter.to_query();
        assert_eq!(query.len(), 6);
        assert_eq!(query[0], ("search", "report".to_string()));
        assert_eq!(query[1], ("status", "pending".to_string()));
        assert_eq!(query[2], ("priority", "high".to_string()));
        assert_eq!(query[3], ("due_date", "before:2026-01-01".to_string()));
        assert_eq!(query[4], ("sort_by", "due_date".to_string()));
        assert_eq!(query[5], ("sort_order", "desc".to_string()));
    }

    #[test]
    fn test_due_bucket_shorthands_use_current_date() {
        let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
        assert_eq!(due_bucket("today"), format!("on:{}", today));
        assert_eq!(due_bucket("overdue"), format!("before:{}", today));
        assert_eq!(due_bucket("upcoming"), format!("after:{}", today));
    }

    #[test]
    fn test_due_bucket_passes_explicit_values_through() {
        assert_eq!(due_bucket("on:2026-03-15"), "on:2026-03-15");
        assert_eq!(due_bucket("after:2026-03-15"), "after:2026-03-15");
        // Malformed values are the server's to reject.
        assert_eq!(due_bucket("whenever"), "whenever");
    }
}
