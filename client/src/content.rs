//! Static portfolio content rendered by the presentation sections.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", href: "#home" },
    NavItem { label: "About", href: "#about" },
    NavItem { label: "Skills", href: "#skills" },
    NavItem { label: "Projects", href: "#projects" },
    NavItem { label: "Experience", href: "#experience" },
    NavItem { label: "Contact", href: "#contact" },
];

/// One row of the contact details list. `href` is `None` for plain text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactDetail {
    pub label: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
}

pub const CONTACT_DETAILS: &[ContactDetail] = &[
    ContactDetail { label: "Phone", value: "+1 555 0100", href: Some("tel:+15550100") },
    ContactDetail { label: "Email", value: "hello@webcraft.example", href: Some("mailto:hello@webcraft.example") },
    ContactDetail { label: "Location", value: "Remote, worldwide", href: None },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "GitHub", href: "https://github.com/webcraft-studio" },
    SocialLink { label: "LinkedIn", href: "https://www.linkedin.com/company/webcraft-studio" },
    SocialLink { label: "Instagram", href: "https://www.instagram.com/webcraft.studio" },
    SocialLink { label: "YouTube", href: "https://www.youtube.com/@webcraft-studio" },
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SkillFilter {
    #[default]
    All,
    Only(SkillCategory),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
}

impl SkillCategory {
    pub const ALL: [Self; 3] = [Self::Frontend, Self::Backend, Self::Tools];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Tools => "Tools",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub category: SkillCategory,
    /// Self-assessed proficiency, 0-100.
    pub level: u8,
    pub description: &'static str,
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "React.js", category: SkillCategory::Frontend, level: 90, description: "Component-driven interfaces and state management" },
    Skill { name: "Three.js", category: SkillCategory::Frontend, level: 85, description: "Interactive 3D scenes for the web" },
    Skill { name: "WebGL", category: SkillCategory::Frontend, level: 80, description: "Low-level 3D graphics programming and custom shader development" },
    Skill { name: "TypeScript", category: SkillCategory::Frontend, level: 88, description: "Typed application code at scale" },
    Skill { name: "Tailwind CSS", category: SkillCategory::Frontend, level: 92, description: "Utility-first styling and design systems" },
    Skill { name: "Node.js", category: SkillCategory::Backend, level: 82, description: "APIs and server-side rendering" },
    Skill { name: "Next.js", category: SkillCategory::Backend, level: 87, description: "Full-stack React with static export" },
    Skill { name: "MongoDB", category: SkillCategory::Backend, level: 78, description: "Document data modeling" },
    Skill { name: "Responsive Design", category: SkillCategory::Tools, level: 95, description: "Layouts that hold up on every screen" },
    Skill { name: "Framer Motion", category: SkillCategory::Tools, level: 83, description: "Choreographed UI animation" },
    Skill { name: "Blender", category: SkillCategory::Tools, level: 70, description: "Modeling and texturing 3D assets" },
];

/// Skills visible under `filter`, in declaration order.
pub fn visible_skills(filter: SkillFilter) -> impl Iterator<Item = &'static Skill> {
    SKILLS.iter().filter(move |skill| match filter {
        SkillFilter::All => true,
        SkillFilter::Only(category) => skill.category == category,
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

pub const PROJECTS: &[Project] = &[
    Project { title: "WebCraft Studios", description: "Agency site with an animated 3D hero and static export.", tags: &["Next.js", "Three.js"] },
    Project { title: "3D Physics Visualizer", description: "Rigid-body simulations rendered in the browser.", tags: &["WebGL", "TypeScript"] },
    Project { title: "Interactive Dashboard UI", description: "Live metrics dashboard with drill-down charts.", tags: &["React.js", "Tailwind CSS"] },
    Project { title: "Portfolio Engine", description: "Content-driven portfolio generator.", tags: &["Next.js", "MongoDB"] },
    Project { title: "AR Shopping Experience", description: "Product previews placed in the room through the camera.", tags: &["Three.js", "WebXR"] },
    Project { title: "Mobile 3D Gallery", description: "Touch-first gallery of 3D models.", tags: &["Three.js", "Blender"] },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExperienceKind {
    Work,
    Education,
    Certification,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Experience {
    pub title: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub kind: ExperienceKind,
}

pub const EXPERIENCE: &[Experience] = &[
    Experience { title: "Senior 3D Web Developer", organization: "WebCraft Studio", period: "2023 - Present", kind: ExperienceKind::Work },
    Experience { title: "Full Stack Developer", organization: "Freelance", period: "2021 - 2023", kind: ExperienceKind::Work },
    Experience { title: "Master of Computer Science", organization: "University", period: "2019 - 2021", kind: ExperienceKind::Education },
    Experience { title: "Bachelor of Technology", organization: "University", period: "2015 - 2019", kind: ExperienceKind::Education },
    Experience { title: "Frontend Developer Intern", organization: "Startup", period: "2018", kind: ExperienceKind::Work },
    Experience { title: "Professional Certifications", organization: "Various", period: "Ongoing", kind: ExperienceKind::Certification },
];
