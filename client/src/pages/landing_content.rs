//! Static marketing copy for the landing page.

#[cfg(test)]
#[path = "landing_content_test.rs"]
mod landing_content_test;

pub const COMPANY: &str = "Computer Anything LLC";

pub const HERO_TITLE: &str = "All your computer software and web hosting needs, in one place.";
pub const HERO_LEAD: &str = "Bring your vision online, and let us handle the rest. Whether it's a powerful \
website, custom web application, or full-stack hosting solution, Computer Anything LLC builds and maintains it \
all. From backend engineering and database management to secure, reliable hosting and ongoing support, we've \
got you covered.";
pub const HERO_IMAGE: &str = "/img/cpt_anything_box.jpg";
pub const BLOG_LABEL: &str = "Computer Anything Tech Blog";
pub const ABOUT_LABEL: &str = "About the Developer";
pub const ABOUT_URL: &str = "https://cheloniixd.github.io/";

pub const FEATURES_HEADING: &str = "A better way to start technology.";

#[derive(Clone, Copy, Debug)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "bi-collection",
        title: "Software Development",
        body: "Custom software solutions tailored to your business needs. From web applications to mobile apps, \
we build it all with a focus on quality and performance.",
    },
    Feature {
        icon: "bi-building",
        title: "Web Hosting",
        body: "Hosting solutions for all your needs. From small personal sites to large enterprise applications, \
we have you covered.",
    },
];

pub const CONTACT_BLURB: &str = "There's no time like the present to get started on a new project. We're easy \
to get in touch with and we'll help you figure it out. Just reach out and let's get started! If you can imagine \
it, we can build it!";

#[derive(Clone, Copy, Debug)]
pub struct ContactCard {
    pub icon: &'static str,
    pub href: &'static str,
    pub label: &'static str,
}

pub const CONTACTS: &[ContactCard] = &[
    ContactCard { icon: "bi-discord", href: "https://discord.gg/QXs6p75pcS", label: "Join our Discord" },
    ContactCard {
        icon: "bi-facebook",
        href: "https://www.facebook.com/people/Computer-Anything/61567372806344/",
        label: "Ask the community",
    },
    ContactCard { icon: "bi-telephone", href: "tel:+16313586777", label: "Call Us" },
    ContactCard { icon: "bi-envelope", href: "mailto:cpt.anything@gmail.com", label: "Email Us" },
];

#[derive(Clone, Copy, Debug)]
pub struct ReferenceClient {
    pub name: &'static str,
    pub url: &'static str,
    pub logo: &'static str,
    pub summary: &'static str,
}

pub const REFERENCE_CLIENTS: &[ReferenceClient] = &[
    ReferenceClient {
        name: "Tulla Contracting",
        url: "https://tullacontracting.com/",
        logo: "/img/logo_tulla.png",
        summary: "At Tulla Contracting, we rebuilt the entire company website from the ground up, focusing on a \
clean design and mobile responsiveness to enhance the client-facing experience. We implemented a secure SMTP \
integration using PHP to streamline HR communications, allowing large files and images to be submitted directly \
from the site.",
    },
    ReferenceClient {
        name: "NexGen Parts",
        url: "https://nex-genparts.com",
        logo: "/img/logo_nexgen.png",
        summary: "For NexGen, we are developing a client portal that allows users to manage their accounts, view \
invoices, and access support tickets. We are implementing secure authentication and authorization using JWT \
tokens, and integrating with a PostgreSQL database to store user data and transaction history. The project also \
includes a responsive design to ensure a seamless experience across devices.",
    },
    ReferenceClient {
        name: "410 Labs",
        url: "https://410labs.com",
        logo: "/img/logo_410.png",
        summary: "At 410 Labs, we modernized legacy Ruby on Rails applications by upgrading to newer versions, \
refactoring code, and ensuring full test coverage. We integrated Stripe into the mobile backend, handling complex \
ActiveRecord and PostgreSQL migrations.",
    },
];

#[derive(Clone, Copy, Debug)]
pub struct Testimonial {
    pub quote: &'static str,
    pub client: &'static str,
    pub url: &'static str,
    pub logo: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[Testimonial {
    quote: "Working with Computer Anything LLC was an absolute game-changer for our company. From the very \
first consultation, their team demonstrated an impressive depth of knowledge, creativity, and professionalism \
that immediately put us at ease. They took the time to understand our brand, our values, and the unique \
challenges of the contracting industry, translating all of that into a stunning, user-friendly website that \
exceeded every expectation. If you're looking for a website partner who's invested in your success and knows how \
to deliver real value, look no further than Computer Anything LLC. Highly recommended!",
    client: "Tulla Contracting",
    url: "https://tullacontracting.com/",
    logo: "/img/logo_tulla.png",
}];

#[derive(Clone, Copy, Debug)]
pub struct OtherApp {
    pub name: &'static str,
    pub url: &'static str,
    pub image: &'static str,
}

pub const OTHER_APPS: &[OtherApp] = &[OtherApp {
    name: "API Looter",
    url: "https://apilooter.info",
    image: "/img/api_looter.png",
}];

/// Links leaving the site open in a new tab without an opener reference.
/// `tel:`/`mailto:` and same-site links open in place.
pub fn link_target(href: &str) -> Option<(&'static str, &'static str)> {
    if href.starts_with("https://") || href.starts_with("http://") {
        Some(("_blank", "noopener noreferrer"))
    } else {
        None
    }
}
