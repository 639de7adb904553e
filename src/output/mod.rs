pub mod formatter;

pub use formatter::{
    bar_width_for_terminal, format_domain_list, format_json, format_summary, format_tsv,
    should_use_colors,
};
