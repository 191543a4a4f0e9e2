use super::*;

pub static PERSON: Person = Person {
    first_name: "Web1",
    last_name: "LK",
    role: "Web Solutions Provider",
    avatar: "/images/avatar.jpg",
    location: "Asia/Colombo",
    utc_offset_minutes: 5 * 60 + 30,
    languages: &["English", "Sinhala", "Tamil"],
};

pub static NEWSLETTER: Newsletter = Newsletter {
    display: true,
    title: "Subscribe to Web1.LK Newsletter",
    description: "Stay updated with the latest web development trends, industry insights, and our company news.",
};

pub static SOCIAL: &[SocialLink] = &[
    SocialLink {
        name: "GitHub",
        icon: "github",
        link: "https://github.com/web1lk",
    },
    SocialLink {
        name: "LinkedIn",
        icon: "linkedin",
        link: "https://www.linkedin.com/company/web1lk/",
    },
    SocialLink {
        name: "X",
        icon: "x",
        link: "https://twitter.com/web1lk",
    },
    SocialLink {
        name: "Email",
        icon: "email",
        link: "mailto:info@web1.lk",
    },
];

pub static HOME: Home = Home {
    label: "Home",
    title: "Web1.LK - Enterprise Web Solutions",
    description: "Enterprise-grade web solutions for business growth and digital transformation",
    headline: "Transforming Businesses with Web Solutions",
    subline: "We're Web1.LK, a premier provider of enterprise-grade web solutions helping businesses achieve sustainable growth through digital transformation.",
    cta: Link {
        label: "Free Consultation",
        href: "/contact",
    },
    services: &[
        Service {
            title: "Web Applications",
            description: "Custom web applications designed for your specific business requirements",
            icon: "code",
            link: "/services/web-applications",
        },
        Service {
            title: "POS Systems",
            description: "Integrated point-of-sale solutions for retail and hospitality businesses",
            icon: "shoppingCart",
            link: "/services/pos-systems",
        },
        Service {
            title: "SaaS Solutions",
            description: "Scalable software-as-a-service platforms for recurring revenue",
            icon: "cloud",
            link: "/services/saas-solutions",
        },
        Service {
            title: "API Integration",
            description: "Connect your systems with third-party services through robust APIs",
            icon: "connection",
            link: "/services/api-integration",
        },
    ],
    case_studies: &[
        CaseStudy {
            title: "E-commerce Transformation",
            client: "RetailPlus",
            description: "Migrated from legacy system to modern web application, resulting in 45% increase in online sales and 30% reduction in operational costs",
            image: Some("/images/projects/project-01/cover-01.jpg"),
            link: "/work/retailplus-ecommerce",
        },
        CaseStudy {
            title: "Hospital Management System",
            client: "MediCare Group",
            description: "Developed custom healthcare management platform that improved patient processing time by 60% and reduced administrative errors by 75%",
            image: Some("/images/projects/project-01/cover-02.jpg"),
            link: "/work/medicare-management-system",
        },
    ],
    clients: &[
        Client { name: "TechCorp", logo: Some("/images/clients/techcorp.svg") },
        Client { name: "GreenEnergy", logo: Some("/images/clients/greenenergy.svg") },
        Client { name: "MediCare", logo: Some("/images/clients/medicare.svg") },
        Client { name: "RetailPlus", logo: Some("/images/clients/retailplus.svg") },
        Client { name: "FinSolutions", logo: Some("/images/clients/finsolutions.svg") },
        Client { name: "EduLearn", logo: Some("/images/clients/edulearn.svg") },
        Client { name: "TravelWise", logo: Some("/images/clients/travelwise.svg") },
        Client { name: "FoodDelight", logo: Some("/images/clients/fooddelight.svg") },
    ],
    testimonials: &[
        Testimonial {
            quote: "Web1.LK transformed our business with their custom POS system. Our checkout times improved by 40% and inventory management has never been easier.",
            author: "Samantha Perera",
            position: "Operations Director",
            company: "RetailPlus",
            image: "/images/avatar.jpg",
        },
        Testimonial {
            quote: "The team at Web1.LK delivered our SaaS platform ahead of schedule and under budget. Their technical expertise and business understanding made all the difference.",
            author: "Rajan Kumar",
            position: "CTO",
            company: "TechCorp",
            image: "/images/avatar.jpg",
        },
    ],
};

pub static ABOUT: About = About {
    label: "About",
    title: "About us",
    description: "Learn more about Web1.LK and our mission to transform businesses",
    table_of_content: TrackerOptions {
        display: true,
        sub_items: false,
    },
    calendar: Calendar {
        display: true,
        link: "https://calendly.com/web1lk/consultation",
    },
    intro: Intro {
        display: true,
        title: "Introduction",
        paragraphs: &[
            "At Web1.LK, we're pioneering digital transformation across Sri Lanka and beyond. As a premier provider of enterprise-grade web solutions, we combine cutting-edge technology with deep business insights to create impactful digital experiences that deliver measurable results.",
            "Our team of expert developers, designers, and strategists work collaboratively to craft tailored solutions that address your unique business challenges and capitalize on emerging opportunities.",
        ],
        mission: "To empower businesses through innovative web solutions that drive sustainable growth, optimize operations, and catalyze digital transformation in an evolving marketplace.",
        vision: "To be recognized globally as the premier architect of enterprise-grade web solutions, setting new standards for technical excellence, innovation, and client success.",
        values: &[
            CoreValue { title: "Innovation", description: "Constantly pushing boundaries to deliver cutting-edge solutions." },
            CoreValue { title: "Excellence", description: "Maintaining the highest standards in every aspect of our work." },
            CoreValue { title: "Integrity", description: "Building relationships based on trust, transparency, and honesty." },
            CoreValue { title: "Collaboration", description: "Working together with clients to achieve shared objectives." },
            CoreValue { title: "Results-Driven", description: "Focusing on measurable outcomes that drive business success." },
            CoreValue { title: "Adaptability", description: "Embracing change and evolving with the technology landscape." },
        ],
    },
    work: Work {
        display: true,
        title: "Our Journey",
        description: "A brief timeline of Web1.LK's growth since our founding.",
        milestones: &[
            Milestone {
                year: "2018",
                title: "Founded in Colombo",
                description: "Web1.LK was established to provide enterprise web solutions",
            },
            Milestone {
                year: "2020",
                title: "Service Expansion",
                description: "Launched our POS and healthcare management platforms",
            },
            Milestone {
                year: "2022",
                title: "Regional Growth",
                description: "Expanded operations across Sri Lanka with multiple industry partnerships",
            },
        ],
    },
    studies: Studies {
        display: false,
        title: "Our Partners",
        institutions: &[
            Institution {
                name: "Technology Innovation Hub",
                description: "Strategic technology partner for AI and ML solutions.",
            },
            Institution {
                name: "University of Colombo",
                description: "Academic collaboration for research and talent acquisition.",
            },
            Institution {
                name: "Digital Sri Lanka Initiative",
                description: "Member of the national digital transformation committee.",
            },
        ],
    },
    technical: Technical {
        display: true,
        title: "Our Technology Expertise",
        subtitle: Some("We leverage best-in-class technologies to build scalable, secure, and high-performing solutions"),
        skills: &[
            Skill {
                title: "Frontend Architecture",
                description: "Modern, responsive interfaces built with React, Next.js, Vue.js, and Angular, delivering exceptional user experiences across all devices.",
                technologies: &["React", "Next.js", "Vue.js", "Angular", "TypeScript", "TailwindCSS", "Material UI"],
            },
            Skill {
                title: "Backend Systems",
                description: "Robust, scalable server architecture using Node.js, Django, Laravel, and .NET, with cloud-native approaches for maximum reliability and performance.",
                technologies: &["Node.js", "Python/Django", "PHP/Laravel", ".NET Core", "Express", "GraphQL", "REST APIs"],
            },
            Skill {
                title: "Data Management",
                description: "Optimized database design and implementation with SQL and NoSQL solutions, ensuring data integrity, security, and high-speed access patterns.",
                technologies: &["MySQL", "MongoDB", "PostgreSQL", "Redis", "Elasticsearch", "Firebase", "Data Modeling"],
            },
            Skill {
                title: "DevOps & Infrastructure",
                description: "Streamlined CI/CD pipelines with automated testing, containerization, and infrastructure-as-code for efficient deployment and scaling.",
                technologies: &["Docker", "Kubernetes", "AWS", "Azure", "CI/CD", "Terraform", "Security Hardening"],
            },
        ],
    },
};

pub static BLOG: Blog = Blog {
    label: "Blog",
    title: "Industry Insights & Updates",
    description: "Expert articles on web development, digital transformation, and business technology",
    categories: &[
        BlogCategory {
            title: "Industry Insights & Trends",
            description: "Latest developments and future predictions for enterprise web solutions",
            posts: &[
                PostLink { title: "The Future of Web Applications in 2025 and Beyond", slug: "future-web-applications-2025" },
                PostLink { title: "How Digital Transformation is Reshaping Sri Lankan Businesses", slug: "digital-transformation-sri-lanka" },
                PostLink { title: "5 Technology Trends That Will Define Enterprise Solutions This Year", slug: "technology-trends-enterprise-solutions" },
            ],
        },
        BlogCategory {
            title: "Solution-Specific Content",
            description: "Detailed analysis of enterprise web solutions and their implementation",
            posts: &[
                PostLink { title: "POS Systems: Cloud-Based vs. On-Premises Solutions Compared", slug: "pos-systems-comparison" },
                PostLink { title: "Building SaaS Applications That Scale: Architecture Decisions That Matter", slug: "scaling-saas-applications" },
                PostLink { title: "API Integration Best Practices for Enterprise Applications", slug: "api-integration-best-practices" },
            ],
        },
        BlogCategory {
            title: "Technical Tutorials & Education",
            description: "Guides and insights for implementing technical solutions in your business",
            posts: &[
                PostLink { title: "A Beginner's Guide to Understanding API Integration", slug: "beginners-guide-api-integration" },
                PostLink { title: "Securing Your Web Application: Essential Steps Every Business Should Take", slug: "securing-web-applications" },
                PostLink { title: "Database Selection Guide: Finding the Right Solution for Your Business Needs", slug: "database-selection-guide" },
            ],
        },
        BlogCategory {
            title: "Business Value & ROI",
            description: "Insights on maximizing return on investment for your technology solutions",
            posts: &[
                PostLink { title: "Calculating ROI on Custom Software Development Projects", slug: "calculating-roi-software-development" },
                PostLink { title: "Hidden Costs of Delaying Digital Transformation", slug: "hidden-costs-digital-transformation" },
                PostLink { title: "How the Right POS System Reduces Operational Costs: Real Numbers", slug: "pos-system-operational-costs" },
            ],
        },
    ],
};
