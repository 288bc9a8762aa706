//! Canonical page data. One version per page.

use super::{
    AboutData, AboutHero, Category, Charity, CharityStats, GalleryItem, HomeData, HomeHero,
    Journey, Link, Panel, PhilanthropyData, PhilanthropyHero, Quote, RushEvent, Section, SiteInfo,
    Stat, TextBlock,
};

fn link(text: &str, href: &str) -> Link {
    Link {
        text: text.into(),
        href: href.into(),
    }
}

fn stat(value: &str, label: &str) -> Stat {
    Stat {
        value: value.into(),
        label: label.into(),
    }
}

fn quote(text: &str, author: &str) -> Quote {
    Quote {
        text: text.into(),
        author: author.into(),
    }
}

fn block(title: &str, content: &[&str]) -> TextBlock {
    TextBlock {
        title: title.into(),
        content: strings(content),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(super) fn site() -> SiteInfo {
    SiteInfo {
        chapter: "Nu Alpha Chapter of Delta Kappa Epsilon".into(),
        copyright: "© Nu Alpha Chapter of Delta Kappa Epsilon 2025".into(),
        donate_url:
            "https://collect.crowded.me/collection/8620c6a3-2b16-4adc-925e-d52526098ace".into(),
        socials: vec![
            link("LinkedIn", "https://www.linkedin.com"),
            link("Instagram", "https://www.instagram.com"),
            link("Facebook", "https://www.facebook.com"),
        ],
        countdown_target: "2026-01-23T21:30:00".into(),
        countdown_label: "Rush Ends in...".into(),
    }
}

pub(super) fn home() -> HomeData {
    HomeData {
        hero: HomeHero {
            letters: strings(&["Δ", "K", "E"]),
            title: "Nu Alpha Chapter, Northeastern University".into(),
            subtitle: String::new(),
            buttons: vec![link("Rush", "/rush"), link("About", "/about")],
            images: strings(&[
                "images/formalBeach.JPG",
                "images/allGrads.jpg",
                "images/mexico3.JPG",
                "images/springFormal.jpg",
            ]),
        },
        quote: quote(
            "\"To educate a person in the mind but not in morals is to educate a menace to society.\"",
            "- Theodore Roosevelt, Phi Yale",
        ),
        grid: strings(&[
            "images/allGrads.jpg",
            "images/fire2.JPG",
            "images/mexico3.JPG",
            "images/gioGator.JPG",
            "images/ianJayden.jpg",
            "images/hammocks.jpg",
            "images/roof.jpg",
            "images/woods.jpg",
            "images/band1.jpg",
            "images/band2.jpg",
            "images/band3.jpg",
            "images/band4.jpg",
            "images/bird.jpg",
            "images/kappa.jpg",
            "images/lambda.jpg",
            "images/dance1.jpg",
            "images/dance2.jpg",
            "images/dance3.jpg",
            "images/springFormal.jpg",
            "images/rodGrad.jpg",
            "images/halloweenDj.JPG",
            "images/podesta.JPG",
            "images/roof.jpg",
            "images/partyDark.JPG",
            "images/hammocks.jpg",
            "images/ianJayden.jpg",
            "images/sunglasses.JPG",
            "images/roof.jpg",
        ]),
        panels: vec![
            Panel {
                title: "Gentlemen".into(),
                image: "images/formalCoolers.JPG".into(),
                lines: strings(&["4x honored by IHQ", "$45,000+ raised for charity"]),
                rotating: Vec::new(),
            },
            Panel {
                title: "Scholars".into(),
                image: "images/harrison.jpg".into(),
                lines: strings(&["Average GPA: 3.57"]),
                rotating: strings(&[
                    "SpaceX",
                    "Abiomed",
                    "Goldman Sachs",
                    "BCG",
                    "Deloitte",
                    "Frensius MC",
                    "MORSE",
                    "Draper",
                    "Spectre",
                    "Honeybee",
                    "JPM",
                    "notability",
                    "Abbott",
                    "Point 72",
                ]),
            },
            Panel {
                title: "Jolly Good Fellows".into(),
                image: "images/mexico4.JPG".into(),
                lines: strings(&["Alphonsus Noise Complaints: 18"]),
                rotating: Vec::new(),
            },
        ],
    }
}

pub(super) fn about() -> AboutData {
    AboutData {
        hero: AboutHero {
            est: "Est. 1844".into(),
            title: "DELTA KAPPA EPSILON".into(),
            subtitle: "Friends from the heart, forever".into(),
            image: "images/pongTrophy.JPG".into(),
        },
        history: block(
            "Delta Kappa Epsilon Legacy",
            &[
                "Founded on June 22, 1844, at Yale University by fifteen sophomores who sought to create something extraordinary. These visionary young men established Delta Kappa Epsilon with the revolutionary idea that the ideal fraternity member should combine 'in the most equal proportions the Gentleman, the Scholar, and the Jolly Good Fellow.'",
                "From our humble beginnings in room twelve of Old South Hall at Yale, DKE has grown into one of America's most distinguished fraternities. Our motto, 'Κηροθεν Φιλοι ἀει' (Friends from the Heart, Forever), embodies the lifelong bonds that define our brotherhood and the enduring commitment we make to one another.",
                "For over 180 years, Delta Kappa Epsilon has remained true to its founding principles while adapting to serve each new generation. We continue to attract and develop the finest young men, preparing them to become leaders in their communities, professions, and the world at large.",
            ],
        ),
        stats: Section {
            title: "Our Legacy in Numbers".into(),
            subtitle:
                "Over 180 years of excellence, leadership, and brotherhood across North America"
                    .into(),
            items: vec![
                stat("1844", "Founded at Yale"),
                stat("5", "U.S. Presidents"),
                stat("56", "Active Chapters"),
                stat("180+", "Years of Excellence"),
            ],
        },
        quote: quote(
            "There could be no definition of a successful life that does not include service to others. Find something to do. Get off the bench. Don't sit there whining, sucking your thumb, get in the game.",
            "— Brother George H.W. Bush, Phi Yale",
        ),
        values: Section {
            title: "Our Core Values".into(),
            subtitle:
                "The three pillars that define every DKE brother and guide our fraternity's mission"
                    .into(),
            items: vec![
                block(
                    "Gentlemen",
                    &[
                        "We cultivate character, integrity, and honor in all our actions. A DKE gentleman conducts himself with dignity, treats others with respect, and upholds the highest moral standards both within and beyond the fraternity.",
                        "Our commitment to being gentlemen extends to every aspect of life - from how we treat our brothers and guests, to our conduct in academic and professional settings, to our service in the community.",
                    ],
                ),
                block(
                    "Scholars",
                    &[
                        "Academic excellence is fundamental to our brotherhood. We believe that intellectual growth and scholarly achievement are essential to personal development and future success.",
                        "DKE brothers support each other's educational pursuits, maintain high academic standards, and understand that learning extends far beyond the classroom into lifelong intellectual curiosity and growth.",
                    ],
                ),
                block(
                    "Jolly Good Fellows",
                    &[
                        "Brotherhood and fellowship are at the heart of the DKE experience. We foster deep, lasting friendships built on mutual respect, shared values, and genuine care for one another.",
                        "The bonds we form as jolly good fellows create a network of support that extends throughout our lives, connecting us to brothers across generations and providing a foundation for personal and professional success.",
                    ],
                ),
            ],
        },
        gallery: Section {
            title: "Life in Our Chapter".into(),
            subtitle: "Experience the brotherhood, excellence, and traditions that define DKE"
                .into(),
            items: vec![
                gallery("images/springFormal.jpg", "Spring Formal 2024", "Celebrating brotherhood in style and tradition"),
                gallery("images/movember5k2.JPG", "Community Service", "Serving others and making a difference"),
                gallery("images/pongTrophy.JPG", "Intramural Champions", "Excellence in competition and sportsmanship"),
                gallery("images/semiLambda.JPG", "Academic Excellence", "Scholars committed to intellectual growth"),
                gallery("images/mexico3.JPG", "Brotherhood Retreat", "Building lifelong bonds and memories"),
                gallery("images/oldheads.JPG", "Alumni Weekend", "Friends from the heart, forever"),
            ],
        },
        brotherhood: block(
            "Friends From the Heart, Forever",
            &[
                "Our motto, 'Κηροθεν Φιλοι ἀει' (Friends from the Heart, Forever), captures the essence of what makes DKE special. We don't just create friendships; we forge lifelong bonds that transcend time, distance, and circumstance.",
                "Delta Kappa Epsilon strives to develop undergraduate chapters who perform in the top tier of fraternities at their institutions, and a vibrant network of alumni who remain motivated to stay involved with the fraternity after graduation.",
            ],
        ),
        journey: Journey {
            title: "Our Historic Journey".into(),
            paragraphs: strings(&[
                "Delta Kappa Epsilon was founded at Yale University in 1844 by fifteen sophomores who were dissatisfied with the existing fraternity system. They envisioned a new kind of brotherhood that would combine academic excellence, gentlemanly conduct, and genuine fellowship.",
                "From our founding at Yale, DKE quickly expanded across the nation's most prestigious universities. We became known for attracting the finest young men and developing them into leaders who would shape American society for generations to come.",
                "Today, with 56 active chapters across North America, Delta Kappa Epsilon continues its mission of developing gentlemen, scholars, and jolly good fellows who will lead in their communities and professions while maintaining the lifelong bonds of brotherhood.",
            ]),
            images: strings(&[
                "images/halloweenDj.JPG",
                "images/sunglasses.JPG",
                "images/dance1.jpg",
                "images/briggsRoof.JPG",
            ]),
        },
        closing_quote: quote(
            "In a free and compassionate society, the public good depends on private character. DKE has enriched the lives of students by teaching the importance of learning, leadership, and community service.",
            "— Brother George W. Bush, Class of 1968",
        ),
        why_join: block(
            "Why Choose Our Brotherhood?",
            &[
                "Delta Kappa Epsilon offers an unparalleled network of accomplished alumni spanning every industry and profession. From U.S. Presidents to Fortune 500 CEOs, DKE brothers have achieved the highest levels of success and remain committed to helping fellow brothers throughout their careers.",
                "Our commitment to developing gentlemen, scholars, and jolly good fellows means you'll be part of a brotherhood that values character, academic excellence, and genuine friendship.",
            ],
        ),
    }
}

fn gallery(src: &str, title: &str, description: &str) -> GalleryItem {
    GalleryItem {
        src: src.into(),
        title: title.into(),
        description: description.into(),
    }
}

fn event(
    name: &str,
    description: &str,
    datetime: &str,
    location: &str,
    image: &str,
    open: bool,
) -> RushEvent {
    RushEvent {
        name: name.into(),
        description: Some(description.into()),
        datetime: datetime.into(),
        location: location.into(),
        image: image.into(),
        open,
    }
}

pub(super) fn rush() -> Vec<RushEvent> {
    vec![
        event(
            "IFC Info Session",
            "An informative presentation on Northeastern Fraternity Rush and opportunity to meet our brothers and the IFC",
            "2026-01-09T18:30:00",
            "Dodge Hall",
            "images/ifc.jpeg",
            true,
        ),
        event(
            "Brothers & Brisket",
            "Slow cooked Brisket, variety of sides, and a chance to bond with our brothers over a delicious meal.",
            "2026-01-10T14:00:00",
            "814 Parker St",
            "images/rushBbq.jpeg",
            true,
        ),
        event(
            "Poker Night",
            "Poker. Cigars. Drinks. A true gentlemen's night.",
            "2026-01-14T18:00:00",
            "Invite Only",
            "images/poker.JPG",
            true,
        ),
        event(
            "Wing Night",
            "A wide selection of wings, drinks, sports, and brothers.",
            "2026-01-15T18:00:00",
            "Centennial Quad",
            "images/fire3.JPG",
            true,
        ),
        event(
            "House Tours",
            "PNMs are guided through our nine houses in Mission Hill, showcasing our rooms, backyards, and event spaces. The night wraps up with dinner, s'mores, and a campfire hangout at one of the houses.",
            "2026-01-18T19:00:00",
            "Mission Hill",
            "images/house.jpg",
            false,
        ),
        event(
            "Pancakes & Pong",
            "PNMs team up with a brother of their choice for a bracket-style pong tournament, all competing for the legendary DKE Trophy. Alongside the tournament, we serve up fresh pancakes and sausages to keep everyone fueled during the games.",
            "2026-01-20T18:30:00",
            "Invite Only",
            "images/pongTrophy.JPG",
            false,
        ),
        event(
            "Banquet",
            "Our formal banquet, held on campus and catered by our favorite Italian restaurant, is a night of connection and celebration. Over dinner, speeches, and shared stories, brothers and PNMs get the chance to build meaningful bonds in a more formal setting.",
            "2026-01-23T18:30:00",
            "Invite Only",
            "images/banquetf24.JPG",
            false,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn charity(
    id: &str,
    name: &str,
    category: Category,
    description: &str,
    image: Option<&str>,
    primary: Stat,
    secondary: Stat,
    donation_url: Option<&str>,
) -> Charity {
    Charity {
        id: id.into(),
        name: name.into(),
        category,
        description: description.into(),
        image: image.map(String::from),
        image_placeholder: name.into(),
        stats: CharityStats { primary, secondary },
        donation_url: donation_url.map(String::from),
    }
}

pub(super) fn philanthropy() -> PhilanthropyData {
    PhilanthropyData {
        hero: PhilanthropyHero {
            title: "Making a Difference Together".into(),
            subtitle: "Our commitment to philanthropy defines who we are. Through dedicated service and community partnerships, we strive to create lasting positive change in our community and beyond.".into(),
            stats: vec![
                stat("$50K+", "Raised This Year"),
                stat("2,500", "Service Hours"),
                stat("15", "Partner Charities"),
                stat("100%", "Brother Participation"),
            ],
            video: "videos/greekSing.mp4".into(),
        },
        charities: vec![
            charity(
                "stjude",
                "St. Jude Children's Research Hospital",
                Category::Health,
                "Leading the way the world understands, treats and defeats childhood cancer and other life-threatening diseases.",
                Some("images/pongTrophy.JPG"),
                stat("$12,500", "Raised in 2024"),
                stat("500+", "Hours Volunteered"),
                Some("example.com"),
            ),
            charity(
                "makeawish",
                "Make-A-Wish Foundation",
                Category::Health,
                "Creating life-changing wishes for children with critical illnesses, bringing hope and joy to families.",
                Some("images/pongTrophy.JPG"),
                stat("$8,000", "Raised in 2024"),
                stat("3", "Wishes Granted"),
                None,
            ),
            charity(
                "foodbank",
                "Community Food Bank",
                Category::Community,
                "Fighting hunger in our community by providing nutritious food to families in need through our monthly drives.",
                Some("images/pongTrophy.JPG"),
                stat("10,000 lbs", "Food Collected"),
                stat("800+", "Families Helped"),
                None,
            ),
            charity(
                "boysgirlsclub",
                "Boys & Girls Club",
                Category::Education,
                "Mentoring youth through after-school programs, tutoring, and athletic activities to build tomorrow's leaders.",
                Some("images/pongTrophy.JPG"),
                stat("750", "Mentoring Hours"),
                stat("50", "Kids Mentored"),
                None,
            ),
            charity(
                "habitat",
                "Habitat for Humanity",
                Category::Community,
                "Building homes, communities and hope. Our brothers volunteer monthly on construction projects.",
                None,
                stat("2", "Homes Built"),
                stat("600+", "Build Hours"),
                None,
            ),
            charity(
                "scholars",
                "First Generation Scholars",
                Category::Education,
                "Supporting first-generation college students with scholarships and mentorship programs.",
                None,
                stat("$15,000", "Scholarships Given"),
                stat("10", "Students Supported"),
                None,
            ),
        ],
    }
}
