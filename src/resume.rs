//! # Résumé Content
//!
//! The content tree shown by the navigator. Each screen is a producer
//! function; branches point at other producers, leaves carry static text.
//! Adding a section means writing one more `fn() -> Node` and linking it
//! from a parent with `Entry::branch`.

use crate::core::node::{Entry, Node};

/// The top-level screen.
pub fn root() -> Node {
    Node::new(
        "Bhuwan Panta's CV",
        vec![
            Entry::branch("Introduction", "Basic Information and Contact", introduction),
            Entry::branch("Skills", "Technical and Non-Technical Proficiencies", skills),
            Entry::branch("Experience", "Details of Professional Experience", experience),
            Entry::branch("Projects", "Details of Self-Employed Projects", projects),
            Entry::branch("Education", "Academic Background", education),
            Entry::branch("Languages", "Language Proficiencies", languages),
        ],
    )
}

pub fn introduction() -> Node {
    Node::new(
        "Introduction",
        vec![
            Entry::leaf(
                "Contact",
                "Email: ricky.pantha@gmail.com | Phone: +977-9844718578 | Location: Lalitpur, Nepal",
            ),
            Entry::leaf(
                "Summary",
                "Results-driven and solution-oriented Software Engineer adept at analyzing and \
                 developing software to achieve scalable solutions. Skilled in fostering \
                 collaboration, optimizing services, and delivering projects on time and within scope.",
            ),
            Entry::leaf("LinkedIn", "linkedin.com/in/bhuwan-panta"),
            Entry::leaf("Github", "github.com/bhuwan-panta"),
        ],
    )
}

pub fn skills() -> Node {
    Node::new(
        "Skills",
        vec![
            Entry::leaf("Programming Languages", "Python, Go, JavaScript"),
            Entry::leaf("Frameworks", "FastAPI, Flask, Django, Node (Runtime), Express"),
            Entry::leaf("Databases", "MongoDB, MySQL, PostgreSQL"),
            Entry::leaf("Cloud Services", "AWS (S3, Lambda)"),
            Entry::leaf("Search Technologies", "Vector Search, Elasticsearch, Fuzzy Search"),
            Entry::leaf(
                "Other (Technical)",
                "REST API, OPA, Rego, SOAP XML, Docker, Kubernetes, RabbitMQ, Microservices",
            ),
            Entry::leaf(
                "Other (Non-Technical)",
                "Client Communication, Product Initiatives, Leadership",
            ),
        ],
    )
}

pub fn experience() -> Node {
    Node::new(
        "Experience",
        vec![
            Entry::branch(
                "Software Engineer, Tekvortex",
                "Bhaktapur, Nepal | Jan 2021 – Jan 2022",
                tekvortex,
            ),
            Entry::branch(
                "Software Engineer, RippeyAI",
                "Louisville, CO | Aug 2022 – Jul 2024",
                rippey_ai,
            ),
            Entry::branch(
                "Software Engineer, LancemeUp",
                "Lalitpur, Nepal | Feb 2022 – Jul 2022",
                lanceme_up,
            ),
        ],
    )
}

pub fn tekvortex() -> Node {
    Node::new(
        "Tekvortex - Software Engineer",
        vec![Entry::leaf(
            "MITM Proxy",
            "Working on BAF(Build Application Firewall) Product",
        )],
    )
}

pub fn rippey_ai() -> Node {
    Node::new(
        "RippeyAI - Software Engineer",
        vec![
            Entry::leaf(
                "Deployment Free API Integration",
                "Implemented Domain-Driven Design; onboarded 10 customers/8 carriers; \
                 consolidated microservices (20% cost reduction); reduced onboarding time by 60%.",
            ),
            Entry::leaf(
                "Microsoft Teams Integration",
                "Constructed seamless MS Teams integration for chatbots; reduced customer \
                 onboarding to 30 mins; implemented real-time failover (50% response time reduction).",
            ),
            Entry::leaf(
                "Enhanced Email Parsing Service",
                "Improved email parsing for foreign characters (5% data integrity); increased \
                 efficiency for diverse attachments (15%); increased overall accuracy by 20%.",
            ),
            Entry::leaf(
                "Developed Internal Tools",
                "Enhanced accuracy for date/currency formats (10% error reduction); created \
                 Universal Unit Conversion tool (~35% processing speed increase); developed vector \
                 search for charge codes (30% search accuracy); automated Excel ops (80% time reduction).",
            ),
            Entry::leaf(
                "Built Customizable Rate Engine",
                "Analyzed libraries (15% dependency cost reduction); engineered Rate Engine (40% \
                 config time reduction); collaborated with CTO (20% timeline reduction); \
                 participated in meetings (30% project success rate).",
            ),
        ],
    )
}

pub fn lanceme_up() -> Node {
    Node::new(
        "LancemeUp - Software Engineer",
        vec![Entry::leaf(
            "Enhanced Legacy Project",
            "Maintained backend for Medisoft independently; understood codebase quickly (50% \
             transition time reduction); interacted with clients (25% client satisfaction increase).",
        )],
    )
}

pub fn projects() -> Node {
    Node::new(
        "Solopreneur Projects",
        vec![
            Entry::branch(
                "Share Excel",
                "Nawalparasi, Nepal | Feb 2020 - Apr 2021",
                share_excel,
            ),
            Entry::branch(
                "Automatic Grade Ledger Application",
                "Nawalparasi, Nepal | Feb 2020 - Apr 2021",
                grade_ledger,
            ),
        ],
    )
}

pub fn share_excel() -> Node {
    Node::new(
        "Share Excel Project",
        vec![
            Entry::leaf(
                "Description",
                "Developed stock portfolio management using Excel/VBA for ~100 users.",
            ),
            Entry::leaf(
                "Features",
                "Live portfolio tracking, watchlist, interactive dashboards, near real-time stock \
                 prices (40% user engagement).",
            ),
            Entry::leaf(
                "Methodology",
                "Applied Agile; continuously improved based on feedback (1000% product value increase).",
            ),
        ],
    )
}

pub fn grade_ledger() -> Node {
    Node::new(
        "Automatic Grade Ledger Application",
        vec![
            Entry::leaf(
                "Description",
                "Developed an application to assist teachers in publishing results from home \
                 during COVID (benefited over 10 teachers).",
            ),
            Entry::leaf(
                "Extended Scope",
                "Built comprehensive School Management Application (admission, accounting, result \
                 management); decreased application usage by 60% (likely meant increased \
                 efficiency/reduced manual work).",
            ),
        ],
    )
}

pub fn education() -> Node {
    Node::new(
        "Education",
        vec![
            Entry::leaf(
                "Bachelor of Computer Science and Information Technology",
                "Bhaktapur Multiple Campus, Bhaktapur, Nepal | Apr 2021 – Apr 2025",
            ),
            Entry::leaf(
                "Science / Physics",
                "Tilottama Higher Secondary School, Butwal, Nepal | Aug 2018 – Sept 2020",
            ),
        ],
    )
}

pub fn languages() -> Node {
    Node::new(
        "Languages",
        vec![
            Entry::leaf("Nepali", "Native"),
            Entry::leaf("English", "Advanced"),
            Entry::leaf("Hindi", "Conversational"),
            Entry::leaf("German", "Basic"),
        ],
    )
}
