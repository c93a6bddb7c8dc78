use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of certifications shown before "Show All" is pressed.
pub const CERTIFICATION_PREVIEW_COUNT: usize = 5;

/// Height of the certification viewport while collapsed / expanded.
pub const CERTIFICATION_VIEWPORT_COLLAPSED: f64 = 400.0;
pub const CERTIFICATION_VIEWPORT_EXPANDED: f64 = 600.0;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("invalid content JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("required field `{0}` is empty")]
    EmptyField(&'static str),
}

/// Everything the page displays. Static for the life of the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub socials: Vec<SocialLink>,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<Project>,
    /// Link to the full project archive.
    pub projects_archive: String,
    pub posts: Vec<BlogPost>,
    /// Link to the blog index.
    pub blog_index: String,
    pub certifications: Vec<Certification>,
    pub contact: ContactDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub bio: String,
    /// Path of the downloadable résumé.
    pub resume_path: String,
    /// File name the résumé is saved under.
    pub resume_file_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    Github,
    Linkedin,
    X,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github: String,
    pub live: String,
    pub image: String,
    /// "Read More Detail" page.
    pub link: String,
    #[serde(default)]
    pub long_description: Option<String>,
    #[serde(default)]
    pub challenges: Option<String>,
    #[serde(default)]
    pub learnings: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub title: String,
    pub excerpt: String,
    /// ISO date, displayed verbatim.
    pub date: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub link: String,
    pub logo: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub blurb: String,
    pub email: String,
    /// Phone number as dialled (`tel:` target).
    pub phone: String,
    /// Phone number as displayed.
    pub phone_display: String,
}

impl Portfolio {
    /// The certifications currently listed: all of them, or the first
    /// [`CERTIFICATION_PREVIEW_COUNT`] in their original order.
    pub fn visible_certifications(&self, show_all: bool) -> &[Certification] {
        if show_all {
            &self.certifications
        } else {
            let end = self.certifications.len().min(CERTIFICATION_PREVIEW_COUNT);
            &self.certifications[..end]
        }
    }

    pub fn social(&self, kind: SocialKind) -> Option<&SocialLink> {
        self.socials.iter().find(|s| s.kind == kind)
    }

    pub fn project(&self, index: usize) -> Option<&Project> {
        self.projects.get(index)
    }
}

/// Height of the certification scroll viewport.
pub fn certification_viewport_height(show_all: bool) -> f64 {
    if show_all {
        CERTIFICATION_VIEWPORT_EXPANDED
    } else {
        CERTIFICATION_VIEWPORT_COLLAPSED
    }
}

/// Parse page content from a JSON document shaped like [`Portfolio`].
pub fn load_portfolio(data: &[u8]) -> Result<Portfolio, ContentError> {
    let portfolio: Portfolio = serde_json::from_slice(data)?;
    if portfolio.profile.name.trim().is_empty() {
        return Err(ContentError::EmptyField("profile.name"));
    }
    if portfolio.profile.title.trim().is_empty() {
        return Err(ContentError::EmptyField("profile.title"));
    }
    Ok(portfolio)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

fn certification(name: &str, issuer: &str, link: &str, logo: &str) -> Certification {
    Certification {
        name: name.to_owned(),
        issuer: issuer.to_owned(),
        date: "2024".to_owned(),
        link: link.to_owned(),
        logo: logo.to_owned(),
    }
}

impl Portfolio {
    /// The content the site ships with.
    pub fn builtin() -> Self {
        const CISCO: &str = "Cisco Networking Academy";
        const CISCO_LOGO: &str = "/img/cisco-logo.svg";

        Self {
            profile: Profile {
                name: "Soubhagyaranjan Das".into(),
                title: "Software Engineer".into(),
                bio: "I am a software engineer based in India, with expertise in machine \
                      learning, networking, cybersecurity, and DBMS. As a fresher, I am \
                      focused on contributing to projects that make a positive impact, while \
                      enhancing my skills in the software development life cycle and the \
                      .NET framework."
                    .into(),
                resume_path: "/d/resume_SoubhagyaranjanDas_kiit_2370435_SEP12.pdf".into(),
                resume_file_name: "resume_SoubhagyaranjanDas.pdf".into(),
            },
            socials: vec![
                SocialLink {
                    kind: SocialKind::Github,
                    href: "https://github.com/StaticAccess".into(),
                },
                SocialLink {
                    kind: SocialKind::Linkedin,
                    href: "https://www.linkedin.com/in/soubhagyaranjan2000/".into(),
                },
                SocialLink {
                    kind: SocialKind::X,
                    href: "https://x.com/SoubhagyaDas_".into(),
                },
            ],
            skills: vec![
                SkillCategory {
                    category: "Programming Languages".into(),
                    skills: strings(&["Python", "Java", "C", "C#", "JavaScript", "SQL"]),
                },
                SkillCategory {
                    category: "Libraries & Frameworks".into(),
                    skills: strings(&["React", "Next.js", "Pandas", "Numpy", "Tailwind CSS", "Flask"]),
                },
                SkillCategory {
                    category: "Tools & Technologies".into(),
                    skills: strings(&["Git & Github", "Docker", "RESTful APIs"]),
                },
                SkillCategory {
                    category: "Databases".into(),
                    skills: strings(&["Redis", "SQLite", "SQLAlchemy"]),
                },
            ],
            projects: vec![
                Project {
                    title: "Book Recommender System".into(),
                    description: "A hybrid book recommendation system using collaborative \
                                  filtering methods."
                        .into(),
                    technologies: strings(&["Python", "Flask", "pandas", "scikit-learn", "Restful API"]),
                    github: "https://github.com/StaticAccess/Book-Recommender-System".into(),
                    live: "https://book-recommender-system-qpiz.onrender.com/".into(),
                    image: "/img/book.png".into(),
                    link: "/p/comingsoon.html".into(),
                    long_description: None,
                    challenges: None,
                    learnings: None,
                },
                Project {
                    title: "Sepsis Prediction Application".into(),
                    description: "Developed a web-based application for sepsis prediction \
                                  using Flask and a Random Forest model, achieving 85% accuracy."
                        .into(),
                    technologies: strings(&[
                        "Python",
                        "Pandas",
                        "Flask",
                        "Numpy",
                        "Scikit-learn",
                        "Random Forest",
                        "SVM",
                        "Logistic Regression",
                    ]),
                    github: "https://github.com/StaticAccess/Sepsis-Prediction-App".into(),
                    live: "https://sepsis-prediction-app.onrender.com/".into(),
                    image: "/img/sepsis.png".into(),
                    link: "/p/comingsoon.html".into(),
                    long_description: None,
                    challenges: None,
                    learnings: None,
                },
            ],
            projects_archive: "/projects".into(),
            posts: vec![
                BlogPost {
                    title: "My Journey into Software Engineering".into(),
                    excerpt: "Reflecting on my first year as a junior developer and the lessons \
                              I've learned."
                        .into(),
                    date: "2023-05-15".into(),
                    link: "/blog/my-journey-into-software-engineering".into(),
                },
                BlogPost {
                    title: "5 React Hooks Every Junior Dev Should Know".into(),
                    excerpt: "A beginner-friendly guide to essential React hooks for building \
                              dynamic UIs."
                        .into(),
                    date: "2023-04-22".into(),
                    link: "/blog/5-react-hooks-every-junior-dev-should-know".into(),
                },
                BlogPost {
                    title: "Getting Started with Version Control".into(),
                    excerpt: "A comprehensive guide to Git for beginners in software development."
                        .into(),
                    date: "2023-03-10".into(),
                    link: "/blog/getting-started-with-version-control".into(),
                },
            ],
            blog_index: "/blog".into(),
            certifications: vec![
                certification(
                    "PCAP: Programming Essentials in Python",
                    "OpenEDG Python Institute",
                    "https://drive.google.com/file/d/12EWlGMBDl2AESdR_PEJOMFjqrQHX7QiO/view?usp=sharing",
                    "/img/Python_Institute_Logo.png",
                ),
                certification(
                    "CCNAv7: Introduction to Networks",
                    CISCO,
                    "https://drive.google.com/file/d/1PHWt4eBsYp4PIL7-iBEGlLdd2X3hkMxQ/view?usp=drive_link",
                    CISCO_LOGO,
                ),
                certification(
                    "CCNAv7: Switching, Routing, and Wireless Essentials",
                    CISCO,
                    "https://drive.google.com/file/d/1vrPydPZEyfND4t4STIm311mQj3vzPxif/view?usp=sharing",
                    CISCO_LOGO,
                ),
                certification(
                    "CCNAv7: Enterprise Networking, Security, and Automation",
                    CISCO,
                    "https://drive.google.com/file/d/1FY6JsVLT47t2DnycIsy8bQ5BKMS_sdlt/view?usp=sharing",
                    CISCO_LOGO,
                ),
                certification(
                    "Introduction to Cybersecurity",
                    CISCO,
                    "https://drive.google.com/file/d/1wMG4AJclhkFm1UYsrIeGz40zoj6QBL-a/view?usp=sharing",
                    CISCO_LOGO,
                ),
                certification(
                    "Cybersecurity Essentials",
                    CISCO,
                    "https://drive.google.com/file/d/1y3qnK5oJvsFDx4mMptj7k3YhAX-9Hufl/view?usp=sharing",
                    CISCO_LOGO,
                ),
                certification(
                    "Supervised Machine Learning: Regression and Classification",
                    "Coursera",
                    "https://coursera.org/share/7aaa3078bbe0e97f9c743ddea5be4116",
                    "/img/deepl.png",
                ),
            ],
            contact: ContactDetails {
                blurb: "I am always open to new opportunities and collaborations. Feel free to \
                        reach out!"
                    .into(),
                email: "soubhagyaranjandas2000@gmail.com".into(),
                phone: "+918328862668".into(),
                phone_display: "+91 8328862668".into(),
            },
        }
    }
}

impl Default for Portfolio {
    fn default() -> Self {
        Self::builtin()
    }
}
