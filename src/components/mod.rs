pub mod blur_text;
pub mod countdown_timer;
pub mod hills_background;
pub mod image_trail;
pub mod vertical_cut_reveal;
