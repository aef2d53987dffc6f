//! Hard-coded copy for the static page sections

/// A service offered by the salon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub name: &'static str,
    pub description: &'static str,
    pub price: &'static str,
}

/// A client testimonial
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub text: &'static str,
    pub location: &'static str,
}

/// A headline number with a caption
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub show_stars: bool,
}

pub const SERVICES: &[Service] = &[
    Service {
        name: "Hair Design & Styling",
        description: "Expert cuts, color treatments, and premium hair styling",
        price: "From ₹500",
    },
    Service {
        name: "Nail Artistry",
        description: "Professional manicures, pedicures, and creative nail art",
        price: "From ₹400",
    },
    Service {
        name: "Skincare & Facials",
        description: "Rejuvenating facials and advanced skincare treatments",
        price: "From ₹800",
    },
    Service {
        name: "Bridal & Special Events",
        description: "Complete bridal makeover and occasion styling services",
        price: "From ₹3,500",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Priya Sharma",
        text: "Seven Salon has been my go-to place for the past two years. The staff is incredibly skilled and always makes me feel comfortable. Every time I leave, I feel absolutely beautiful and confident.",
        location: "Pradhikaran",
    },
    Testimonial {
        name: "Rajesh Patil",
        text: "As a working professional, I appreciate their attention to detail and punctuality. The unisex setup is perfect for my family. The hair styling and grooming services are top-notch.",
        location: "Pimpri Chinchwad",
    },
    Testimonial {
        name: "Sneha Joshi",
        text: "The nail art services here are exceptional! The hygiene standards are impressive, and the staff treats you like family. I've recommended this salon to all my friends in Pune.",
        location: "Nigdi",
    },
];

pub const TESTIMONIAL_STATS: &[Stat] = &[
    Stat {
        value: "4.8",
        label: "Average Rating",
        show_stars: true,
    },
    Stat {
        value: "320+",
        label: "Happy Customers",
        show_stars: false,
    },
    Stat {
        value: "255+",
        label: "Photos Shared",
        show_stars: false,
    },
];

pub const ABOUT_STATS: &[Stat] = &[
    Stat {
        value: "4.8",
        label: "RATING",
        show_stars: false,
    },
    Stat {
        value: "320+",
        label: "CLIENTS",
        show_stars: false,
    },
    Stat {
        value: "8+",
        label: "SERVICES",
        show_stars: false,
    },
];

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "Located in the heart of Pradhikaran, Seven The Hair and Beauty Salon has been Pune's trusted destination for premium unisex grooming and beauty services. Our team of skilled professionals is dedicated to bringing out your natural beauty with precision and care.",
    "We pride ourselves on creating a welcoming environment where every client feels valued. Using high-quality products and maintaining exceptional hygiene standards, we ensure that your salon experience is both relaxing and transformative.",
];

pub const ABOUT_MISSION: &str = "\"Our mission is to make every client look and feel their absolute best. Whether you're here for a simple trim or a complete makeover, we treat every service with the same level of expertise and attention to detail.\"";

/// Services listed in the footer
pub const FOOTER_SERVICES: &[&str] = &[
    "Hair Design & Styling",
    "Nail Art & Manicure",
    "Skincare & Facials",
    "Bridal Makeovers",
    "Men's Grooming",
];

pub const COPYRIGHT_YEAR: u16 = 2025;
