pub mod coming_soon;
