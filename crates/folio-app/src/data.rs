//! Portfolio content: projects, skills, testimonials, and contact
//! details. Plain data, owned by the app rather than fetched, so every
//! page renders deterministically.

use folio_ui::icons::Icon;

/// Broad category a project belongs to, used for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectCategory {
    #[default]
    All,
    Web,
    Mobile,
    Fullstack,
}

impl ProjectCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectCategory::All => "All",
            ProjectCategory::Web => "Web",
            ProjectCategory::Mobile => "Mobile",
            ProjectCategory::Fullstack => "Full Stack",
        }
    }

    pub fn all() -> &'static [ProjectCategory] {
        &[
            ProjectCategory::All,
            ProjectCategory::Web,
            ProjectCategory::Mobile,
            ProjectCategory::Fullstack,
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub category: ProjectCategory,
    pub live_url: Option<&'static str>,
    pub github_url: Option<&'static str>,
    pub featured: bool,
    pub completed_at: &'static str,
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "1",
            title: "E-commerce Platform",
            description: "Modern e-commerce platform with React and Node.js",
            long_description: "A full-stack e-commerce solution with user authentication, \
                product catalog, shopping cart, payment integration, order management, and \
                an admin dashboard. Designed for high traffic with real-time inventory \
                management and comprehensive analytics.",
            image: "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=600&h=400&fit=crop&crop=center",
            technologies: &[
                "React", "Node.js", "MongoDB", "Stripe", "Express", "JWT", "Tailwind CSS",
                "Redis",
            ],
            category: ProjectCategory::Fullstack,
            live_url: Some("https://example.com"),
            github_url: Some("https://github.com"),
            featured: true,
            completed_at: "2024-01-15",
        },
        Project {
            id: "2",
            title: "Mobile Banking App",
            description: "Secure mobile banking application with biometric authentication",
            long_description: "A mobile banking application featuring biometric \
                authentication, account management, transaction history, bill payments, and \
                real-time notifications. Built with security and user experience as top \
                priorities, with end-to-end encryption and fraud detection.",
            image: "https://images.unsplash.com/photo-1512941937669-90a1b58e7e9c?w=600&h=400&fit=crop&crop=center",
            technologies: &[
                "React Native", "Firebase", "TypeScript", "Expo", "Plaid API",
                "Biometric Auth",
            ],
            category: ProjectCategory::Mobile,
            live_url: Some("https://example.com"),
            github_url: None,
            featured: true,
            completed_at: "2024-02-20",
        },
        Project {
            id: "3",
            title: "Portfolio Website",
            description: "Personal portfolio website for a photographer",
            long_description: "A portfolio website for a professional photographer, \
                featuring a gallery with lightbox functionality, client testimonials, a \
                booking system, and a blog. Built with performance and visual appeal in \
                mind.",
            image: "https://images.unsplash.com/photo-1467232004584-a241de8bcf5d?w=600&h=400&fit=crop&crop=center",
            technologies: &["Next.js", "Tailwind CSS", "Framer Motion", "Sanity CMS"],
            category: ProjectCategory::Web,
            live_url: Some("https://example.com"),
            github_url: Some("https://github.com"),
            featured: false,
            completed_at: "2024-03-10",
        },
        Project {
            id: "4",
            title: "Task Management App",
            description: "Collaborative task management application with real-time updates",
            long_description: "A task management application with project organization, \
                team collaboration, real-time updates, file attachments, and detailed \
                reporting. Includes drag-and-drop workflows and integrations with popular \
                tools.",
            image: "https://images.unsplash.com/photo-1611224923853-80b023f02d71?w=600&h=400&fit=crop&crop=center",
            technologies: &["Vue.js", "Node.js", "Socket.io", "PostgreSQL", "Docker"],
            category: ProjectCategory::Fullstack,
            live_url: None,
            github_url: Some("https://github.com"),
            featured: false,
            completed_at: "2024-04-05",
        },
        Project {
            id: "5",
            title: "Weather Dashboard",
            description: "Real-time weather monitoring dashboard with forecasting",
            long_description: "A weather dashboard providing real-time data, 7-day \
                forecasts, and interactive maps, integrated with multiple weather APIs for \
                accurate and reliable data. Features location-based weather, severe weather \
                alerts, and customizable widgets.",
            image: "https://images.unsplash.com/photo-1504608524841-42fe6f032b4b?w=600&h=400&fit=crop&crop=center",
            technologies: &["React", "TypeScript", "Chart.js", "OpenWeather API", "Tailwind CSS"],
            category: ProjectCategory::Web,
            live_url: Some("https://example.com"),
            github_url: Some("https://github.com"),
            featured: false,
            completed_at: "2024-05-12",
        },
        Project {
            id: "6",
            title: "Fitness Tracking App",
            description: "Mobile app for tracking workouts and fitness goals",
            long_description: "A fitness tracking application for monitoring workouts, \
                setting goals, and tracking progress over time. Features an exercise \
                library, workout planning, progress analytics, and social sharing.",
            image: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=600&h=400&fit=crop&crop=center",
            technologies: &["React Native", "SQLite", "Redux", "Chart.js", "Firebase Auth"],
            category: ProjectCategory::Mobile,
            live_url: None,
            github_url: Some("https://github.com"),
            featured: true,
            completed_at: "2024-06-08",
        },
    ]
}

pub fn featured_projects() -> Vec<Project> {
    projects().into_iter().filter(|p| p.featured).collect()
}

pub fn projects_in(category: ProjectCategory) -> Vec<Project> {
    projects()
        .into_iter()
        .filter(|p| category == ProjectCategory::All || p.category == category)
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: Icon,
    pub skills: &'static [&'static str],
}

pub fn skill_categories() -> Vec<SkillCategory> {
    vec![
        SkillCategory {
            title: "Frontend Development",
            icon: Icon::Code,
            skills: &["React", "Next.js", "TypeScript", "JavaScript", "HTML5", "CSS3"],
        },
        SkillCategory {
            title: "UI/UX Design",
            icon: Icon::Palette,
            skills: &["Figma", "Adobe XD", "Sketch", "Photoshop", "Illustrator", "Prototyping"],
        },
        SkillCategory {
            title: "Mobile Development",
            icon: Icon::Smartphone,
            skills: &["React Native", "Flutter", "Dart", "Swift", "Kotlin", "Expo"],
        },
        SkillCategory {
            title: "Backend & Database",
            icon: Icon::Database,
            skills: &["Node.js", "Express", "MongoDB", "PostgreSQL", "Firebase", "Supabase"],
        },
        SkillCategory {
            title: "Web Technologies",
            icon: Icon::Globe,
            skills: &["REST APIs", "GraphQL", "WebSockets", "PWA", "SEO", "Performance"],
        },
        SkillCategory {
            title: "Tools & DevOps",
            icon: Icon::Zap,
            skills: &["Git", "Docker", "AWS", "Vercel", "Webpack", "Vite", "Testing"],
        },
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub content: &'static str,
    pub rating: u8,
    pub avatar: &'static str,
    pub date: &'static str,
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: "1",
            name: "Sarah Johnson",
            role: "Product Manager",
            company: "TechCorp Inc.",
            content: "Alex delivered an outstanding website that exceeded our expectations. \
                The attention to detail and user experience is remarkable. Our conversion \
                rate increased by 40% after the redesign.",
            rating: 5,
            avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=Sarah&backgroundColor=b6e3f4&radius=50",
            date: "2024-03-15",
        },
        Testimonial {
            id: "2",
            name: "Michael Chen",
            role: "CEO",
            company: "StartupXYZ",
            content: "Working with Alex was a game-changer for our business. The mobile app \
                they developed is intuitive, fast, and our users love it. Highly recommend \
                for any development project.",
            rating: 5,
            avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=Michael&backgroundColor=c084fc&radius=50",
            date: "2024-02-28",
        },
        Testimonial {
            id: "3",
            name: "Emily Rodriguez",
            role: "Marketing Director",
            company: "Creative Agency",
            content: "Alex's design skills are exceptional. They transformed our brand \
                identity and created a cohesive visual language that perfectly represents \
                our company. Professional and creative.",
            rating: 5,
            avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=Emily&backgroundColor=fbbf24&radius=50",
            date: "2024-01-20",
        },
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactChannel {
    pub icon: Icon,
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub fn contact_channels() -> Vec<ContactChannel> {
    vec![
        ContactChannel {
            icon: Icon::Mail,
            label: "Email",
            value: "alex@example.com",
            href: "mailto:alex@example.com",
        },
        ContactChannel {
            icon: Icon::Phone,
            label: "Phone",
            value: "+1 (555) 123-4567",
            href: "tel:+15551234567",
        },
        ContactChannel {
            icon: Icon::MapPin,
            label: "Location",
            value: "San Francisco, CA",
            href: "#",
        },
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct SocialLink {
    pub icon: Icon,
    pub label: &'static str,
    pub href: &'static str,
}

pub fn social_links() -> Vec<SocialLink> {
    vec![
        SocialLink {
            icon: Icon::Github,
            label: "GitHub",
            href: "https://github.com",
        },
        SocialLink {
            icon: Icon::Linkedin,
            label: "LinkedIn",
            href: "https://linkedin.com",
        },
        SocialLink {
            icon: Icon::Twitter,
            label: "Twitter",
            href: "https://twitter.com",
        },
        SocialLink {
            icon: Icon::Mail,
            label: "Email",
            href: "mailto:alex@example.com",
        },
    ]
}

/// The person the portfolio belongs to.
pub mod profile {
    pub const NAME: &str = "Alex Johnson";
    pub const TITLE: &str = "Full Stack Developer & UI/UX Designer";
    pub const TAGLINE: &str = "Creating beautiful, functional, and user-centered digital \
        experiences with modern technologies and design principles.";
    pub const RESUME_URL: &str = "/resume.pdf";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn featured_projects_are_a_strict_subset() {
        let featured = featured_projects();
        assert_eq!(featured.len(), 3);
        assert!(featured.iter().all(|p| p.featured));
        assert!(featured.len() < projects().len());
    }

    #[test]
    fn category_filter_partitions_the_catalog() {
        assert_eq!(projects_in(ProjectCategory::All).len(), projects().len());
        let web = projects_in(ProjectCategory::Web);
        let mobile = projects_in(ProjectCategory::Mobile);
        let fullstack = projects_in(ProjectCategory::Fullstack);
        assert!(web.iter().all(|p| p.category == ProjectCategory::Web));
        assert_eq!(web.len() + mobile.len() + fullstack.len(), projects().len());
    }

    #[test]
    fn project_ids_are_unique() {
        let mut ids: Vec<_> = projects().iter().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), projects().len());
    }

    #[test]
    fn testimonials_carry_valid_ratings_and_avatars() {
        for t in testimonials() {
            assert!((1..=5).contains(&t.rating), "{} has bad rating", t.name);
            assert!(t.avatar.starts_with("https://api.dicebear.com/"));
        }
    }

    #[test]
    fn skill_categories_are_nonempty() {
        let categories = skill_categories();
        assert_eq!(categories.len(), 6);
        assert!(categories.iter().all(|c| !c.skills.is_empty()));
    }
}
