#[cfg(test)]
mod common;

#[cfg(test)]
mod slug_tests;

#[cfg(test)]
mod date_range_tests;

#[cfg(test)]
mod case_display_tests;

#[cfg(test)]
mod api_error_tests;

#[cfg(test)]
mod feedback_tests;
