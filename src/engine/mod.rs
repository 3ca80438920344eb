pub mod atoms;
pub mod boolean_assignments;
pub(crate) mod test_helper;
pub mod trailed;
pub mod watch_list;
