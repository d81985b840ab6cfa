mod fragment_registry_tests;
mod test_utils;
mod type_info_tests;
