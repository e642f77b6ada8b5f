//! Demo search components: DemoSection, ResultList

mod demo_section;
mod result_list;

pub use demo_section::DemoSection;
pub use result_list::ResultList;
