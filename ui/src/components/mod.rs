pub mod footer;
pub mod icons;
pub mod mobile_menu;
pub mod simple;

pub use footer::Footer;
pub use icons::*;
pub use mobile_menu::MobileMenu;
pub use simple::*;
