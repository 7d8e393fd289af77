pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_day, prompt_goal, prompt_product, prompt_trip_length, prompt_yes_no,
    run_planning_session,
};
pub use render::{
    display_active_filters, display_cart, display_day, display_product, display_product_list,
};
