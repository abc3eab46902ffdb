//! Page components for the portfolio.

mod about;
mod app;
mod contact;
mod demo;
mod footer;
mod hero;
mod navigation;
mod projects;
mod skills;
mod testimonials;

pub use about::AboutPage;
pub use app::App;
pub use contact::ContactPage;
pub use demo::DemoPage;
pub use footer::Footer;
pub use hero::Hero;
pub use navigation::Navigation;
pub use projects::{ProjectsPage, ProjectsSection};
pub use skills::SkillsSection;
pub use testimonials::TestimonialsSection;
