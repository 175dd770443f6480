use std::fmt;

use serde::Serialize;

// static site content
//
// everything in this module is compiled into the binary and never changes during a
// session, so the structs borrow 'static data rather than owning strings.  callers that
// need their own list (the carousel, tests) can clone a Project cheaply

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Websites,
    Webapps,
    Desktop,
    Mobile,
    Extensions,
    Libraries,
    Tools,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Websites,
        Category::Webapps,
        Category::Desktop,
        Category::Mobile,
        Category::Extensions,
        Category::Libraries,
        Category::Tools,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Category::Websites => "websites",
            Category::Webapps => "webapps",
            Category::Desktop => "desktop",
            Category::Mobile => "mobile",
            Category::Extensions => "extensions",
            Category::Libraries => "libraries",
            Category::Tools => "tools",
        }
    }

    // translation key for the chip label
    pub fn label_key(self) -> String {
        format!("work.categories.{}", self.id())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum SecondaryLink {
    Website(&'static str),
    Installer(&'static str),
    None,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Media {
    Image(&'static str),
    Video(&'static str),
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    // github owner/name, also the key into the star cache
    pub repo: &'static str,
    pub tech: &'static [&'static str],
    pub categories: &'static [Category],
    pub link: SecondaryLink,
    pub media: Option<Media>,
}

impl Project {
    pub fn repo_url(&self) -> String {
        format!("https://github.com/{}", self.repo)
    }

    pub fn description_key(&self) -> String {
        format!("projects.{}.description", self.id)
    }

    pub fn has_tech(&self, tech_id: &str) -> bool {
        self.tech.iter().any(|t| *t == tech_id)
    }

    pub fn in_any(&self, categories: &[Category]) -> bool {
        self.categories.iter().any(|c| categories.contains(c))
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum TechKind {
    Language,
    Framework,
    Database,
    Platform,
    Tool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Tech {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: TechKind,
}

const fn tech(id: &'static str, name: &'static str, kind: TechKind) -> Tech {
    Tech { id, name, kind }
}

pub const TECH_STACK: &[Tech] = &[
    tech("c", "C", TechKind::Language),
    tech("css", "CSS", TechKind::Language),
    tech("html", "HTML", TechKind::Language),
    tech("js", "JavaScript", TechKind::Language),
    tech("php", "PHP", TechKind::Language),
    tech("python", "Python", TechKind::Language),
    tech("typescript", "TypeScript", TechKind::Language),
    tech("flutter", "Flutter", TechKind::Framework),
    tech("gsap", "GSAP", TechKind::Framework),
    tech("laravel", "Laravel", TechKind::Framework),
    tech("nestjs", "NestJS", TechKind::Framework),
    tech("nextjs", "Next.js", TechKind::Framework),
    tech("reactjs", "React", TechKind::Framework),
    tech("tailwind", "Tailwind CSS", TechKind::Framework),
    tech("three", "Three.js", TechKind::Framework),
    tech("vue", "Vue", TechKind::Framework),
    tech("mysql", "MySQL", TechKind::Database),
    tech("postgresql", "PostgreSQL", TechKind::Database),
    tech("firebase", "Firebase", TechKind::Platform),
    tech("supabase", "Supabase", TechKind::Platform),
    tech("chrome-extensions", "Chrome Extensions", TechKind::Platform),
    tech("nodejs", "Node.js", TechKind::Platform),
    tech("git", "Git", TechKind::Tool),
    tech("ai", "AI Integration", TechKind::Tool),
    tech("docker", "Docker", TechKind::Tool),
    tech("apicalypse", "Apicalypse", TechKind::Tool),
    tech("make", "Make", TechKind::Tool),
    tech("swagger", "Swagger", TechKind::Tool),
];

pub fn tech_name(id: &str) -> &str {
    TECH_STACK
        .iter()
        .find(|t| t.id == id)
        .map(|t| t.name)
        .unwrap_or(id)
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: "findthagame",
        title: "FindThaGame",
        repo: "kbtale/findthagame",
        tech: &["typescript", "reactjs", "tailwind", "ai", "apicalypse", "git"],
        categories: &[Category::Webapps],
        link: SecondaryLink::Website("https://findthagame.vercel.app"),
        media: None,
    },
    Project {
        id: "ocr-to-txt",
        title: "OCR to TXT",
        repo: "kbtale/ocr-to-txt",
        tech: &["python", "git"],
        categories: &[Category::Desktop, Category::Tools],
        link: SecondaryLink::Installer("https://github.com/kbtale/ocr-to-txt/releases/tag/v1.0"),
        media: None,
    },
    Project {
        id: "lease-sentinel",
        title: "Lease Sentinel",
        repo: "kbtale/lease-sentinel",
        tech: &["nextjs", "typescript", "firebase", "make", "ai", "tailwind", "git"],
        categories: &[Category::Webapps],
        link: SecondaryLink::Website("https://lease-sentinel.vercel.app/"),
        media: None,
    },
    Project {
        id: "palindot",
        title: "Palindot",
        repo: "kbtale/Palindot",
        tech: &["vue", "php", "laravel", "mysql", "swagger", "git"],
        categories: &[Category::Webapps],
        link: SecondaryLink::None,
        media: None,
    },
    Project {
        id: "shell-c",
        title: "Shell C",
        repo: "kbtale/shell-c",
        tech: &["c", "git"],
        categories: &[Category::Tools],
        link: SecondaryLink::None,
        media: None,
    },
    Project {
        id: "retro-notes",
        title: "Retro Notes",
        repo: "kbtale/retro-notes",
        tech: &["reactjs", "typescript", "tailwind", "nestjs", "postgresql", "docker", "git"],
        categories: &[Category::Webapps],
        link: SecondaryLink::None,
        media: None,
    },
    Project {
        id: "exhale-app",
        title: "Exhale App",
        repo: "kbtale/exhale-app",
        tech: &["flutter", "git"],
        categories: &[Category::Mobile],
        link: SecondaryLink::Installer("https://github.com/kbtale/exhale-app/releases/tag/v1.1.0"),
        media: None,
    },
    Project {
        id: "useless-polymath",
        title: "Useless Polymath",
        repo: "kbtale/Useless-Polymath",
        tech: &["reactjs", "typescript", "css", "git"],
        categories: &[Category::Webapps],
        link: SecondaryLink::None,
        media: None,
    },
    Project {
        id: "civy",
        title: "Civy",
        repo: "openrise-hub/civy",
        tech: &["typescript", "reactjs", "tailwind", "nestjs", "postgresql", "docker", "git"],
        categories: &[Category::Webapps],
        link: SecondaryLink::None,
        media: None,
    },
    Project {
        id: "react-three-text-fx",
        title: "React Three Text FX",
        repo: "openrise-hub/react-three-text-fx",
        tech: &["three", "gsap", "reactjs", "git"],
        categories: &[Category::Libraries],
        link: SecondaryLink::Website("https://www.npmjs.com/package/react-three-text-fx"),
        media: None,
    },
    Project {
        id: "openrise-www",
        title: "Openrise Landing Page",
        repo: "openrise-hub/www",
        tech: &["three", "gsap", "nextjs", "typescript", "tailwind", "git"],
        categories: &[Category::Websites],
        link: SecondaryLink::Website("https://openrise.tech/"),
        media: None,
    },
    Project {
        id: "te-filter",
        title: "TE Filter",
        repo: "kbtale/TE-Filter",
        tech: &["chrome-extensions", "css", "js", "git"],
        categories: &[Category::Extensions],
        link: SecondaryLink::None,
        media: None,
    },
];

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Certification {
    pub name: &'static str,
    pub institute: &'static str,
    pub logo: &'static str,
    pub image: &'static str,
    pub url: Option<&'static str>,
    pub year: u16,
}

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        name: "Prompt Engineering & Programming with OpenAI",
        institute: "Columbia University",
        logo: "/certs/columbiauniversitylogo.png",
        image: "/certs/columbia-prompt-engineering.jpg",
        url: Some("https://badges.plus.columbia.edu/e8aa8e6a-d1f6-40ed-a143-625549fd32e6"),
        year: 2025,
    },
    Certification {
        name: "AI for Managers",
        institute: "Microsoft & LinkedIn",
        logo: "/certs/microsoftlogo.png",
        image: "/certs/ai-for-managers.jpg",
        url: None,
        year: 2025,
    },
    Certification {
        name: "Project Management Professional Certification Masterclass",
        institute: "Charles Sturt University",
        logo: "/certs/CSUlogo.png",
        image: "/certs/pmp-masterclass.jpg",
        url: None,
        year: 2025,
    },
    Certification {
        name: "Kaseya Certified Technician in Cybersecurity",
        institute: "Kaseya",
        logo: "/certs/kaseyalogo.png",
        image: "/certs/kaseya-kct.jpg",
        url: None,
        year: 2025,
    },
    Certification {
        name: "Auvik Certified Professional",
        institute: "Auvik",
        logo: "/certs/auviklogo.png",
        image: "/certs/auvik.jpg",
        url: None,
        year: 2024,
    },
];

// work history, newest first
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Experience {
    pub date: &'static str,
    pub company: &'static str,
    pub role: &'static str,
    pub description: &'static str,
    pub url: Option<&'static str>,
}

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        date: "Dec 2025 – Present",
        company: "Openrise",
        role: "Lead Developer",
        description: "Designing open source tools focused on technical efficiency.",
        url: Some("https://openrise.tech/"),
    },
    Experience {
        date: "Jul 2018 – Present",
        company: "Freelance · Remote",
        role: "Freelance Software Developer",
        description: "Delivering end-to-end software solutions and scalable web platforms \
            (Laravel, Vue.js, Node.js), specializing in custom workflow automation tools.",
        url: None,
    },
    Experience {
        date: "Apr 2025 – Nov 2025",
        company: "BetterWorld Technology",
        role: "Service Desk Team Lead (Technical)",
        description: "Led automated reporting workflows using Node.js and API integrations, \
            with record CSAT scores for 4 consecutive months.",
        url: None,
    },
    Experience {
        date: "Jan 2024 – Mar 2025",
        company: "BetterWorld Technology",
        role: "IT Services Delivery Associate",
        description: "Managed network configurations and infrastructure projects; wrote Python \
            migration scripts and Chrome extensions for engineering operations.",
        url: None,
    },
    Experience {
        date: "Apr 2023 – Dec 2023",
        company: "Inglés en Español",
        role: "Technical Support Associate",
        description: "Maintained web platforms (Wix/Velo) and standardized digital evaluation tools.",
        url: None,
    },
    Experience {
        date: "Feb 2022 – Feb 2023",
        company: "Centro Venezolano Americano del Zulia",
        role: "IT Academic Analyst",
        description: "Led digital transformation work and built web tools that increased \
            processing efficiency by 500%.",
        url: None,
    },
];
