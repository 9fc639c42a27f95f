//! The static content store.
//!
//! All portfolio content is constructed once at startup: the built-in
//! profile unless a profile file overrides it. The store is read-only for
//! the rest of the session; views borrow from it, nothing writes back.

use crate::models::{
    Achievement, Certification, EducationEntry, Experience, Profile, Project, Publication,
    SkillCategory,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Immutable collection of every record the document renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentStore {
    pub profile: Profile,
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillCategory>,
    pub publications: Vec<Publication>,
    pub achievements: Vec<Achievement>,
    pub certifications: Vec<Certification>,
    pub education: Vec<EducationEntry>,
}

impl ContentStore {
    /// Load a content store from a JSON or TOML profile file.
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let store: ContentStore = folio_utils::config::load_config(path)?;
        store.validate()?;
        Ok(store)
    }

    /// Check the store invariants: experience bullets must be non-empty.
    pub fn validate(&self) -> crate::Result<()> {
        for exp in &self.experiences {
            if exp.bullets.is_empty() {
                return Err(crate::Error::Content(format!(
                    "experience entry '{}' has no bullets",
                    exp.company
                )));
            }
        }
        Ok(())
    }

    /// The built-in profile.
    pub fn builtin() -> Self {
        Self {
            profile: Profile {
                name: "Spandana A P".to_string(),
                greeting: "Hello, I'm".to_string(),
                about: "A Computer Science undergraduate fueled by the challenge of \
                        architecting intelligent systems and end-to-end software solutions. \
                        With a proven track record across government research labs, startups, \
                        and innovative tech spaces, I specialize in bridging the gap between \
                        theoretical machine learning and scalable real-world impact. I am \
                        passionate about transforming complex data into reliable, user-centric \
                        products. I value clean design, robust engineering, and continuous \
                        learning, and I thrive in environments that push the boundaries of \
                        innovation to create meaningful, lasting impact."
                    .to_string(),
                portrait: "/About1.png".to_string(),
                badge: "Creator".to_string(),
                email: "ap.spandana@gmail.com".to_string(),
                linkedin: "https://linkedin.com/in/spandana-a-p-23451924b/".to_string(),
                github: "https://github.com/spandana2004".to_string(),
                resume_path: "/Spandana_AP.pdf".to_string(),
                footer_heading: "Ready for new challenges.".to_string(),
                copyright: "© 2025 SPANDANA A P • AI/ML • DATA SCIENCE • SOFTWARE ENGINEER"
                    .to_string(),
            },
            experiences: builtin_experiences(),
            projects: builtin_projects(),
            skills: builtin_skills(),
            publications: builtin_publications(),
            achievements: builtin_achievements(),
            certifications: builtin_certifications(),
            education: builtin_education(),
        }
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_experiences() -> Vec<Experience> {
    vec![
        Experience {
            company: "Deputy Director's Office, Bangalore South, Karanata PU Board".to_string(),
            role: "Software Engineering Intern".to_string(),
            period: "July 2025 – Jan 2026".to_string(),
            location: "Bengaluru, Karnataka".to_string(),
            bullets: vec![
                "Developing 'INSIGHT', a robust data management and communication system for \
                 the Bangalore South Pre-University Colleges Principals' Association."
                    .to_string(),
                "Unified digital communication and workflow system connecting DDPU and 400+ \
                 colleges on a single secure platform."
                    .to_string(),
                "Features include info exchange, chat interface, circular page, and \
                 infrastructure tracking."
                    .to_string(),
            ],
            link: Some("https://ddpusouth.co.in/".to_string()),
        },
        Experience {
            company: "IIT Madras (CoPhe Lab)".to_string(),
            role: "Project Intern".to_string(),
            period: "July 2024 – Dec 2024".to_string(),
            location: "Chennai, Tamil Nadu".to_string(),
            bullets: vec![
                "Developed a dual-policy Reinforcement Learning framework for a bio-inspired \
                 autonomous navigation agent."
                    .to_string(),
                "Implemented novel navigation strategies inspired by dung beetles and simulated \
                 complex environments on MUJOCO."
                    .to_string(),
            ],
            link: Some("https://github.com/spandana2004/Bio-inspired-Robotics".to_string()),
        },
        Experience {
            company: "Sasken Technologies Limited".to_string(),
            role: "Intern".to_string(),
            period: "Jun 2025 – July 2025".to_string(),
            location: "Bengaluru, Karnataka".to_string(),
            bullets: vec![
                "Developed TechQABot - A Tech Community QA Bot using agentic and generative AI \
                 concepts."
                    .to_string(),
                "Trained on data from Stack Overflow and Reddit to answer Python programming \
                 queries."
                    .to_string(),
            ],
            link: Some("https://github.com/spandana2004/TechQABot".to_string()),
        },
        Experience {
            company: "Appzera (OPC) Private Ltd.".to_string(),
            role: "AI Intern".to_string(),
            period: "April 2025 – Jun 2025".to_string(),
            location: "Bengaluru, Karnataka".to_string(),
            bullets: vec![
                "Developed a RAG-based chatbot for humanized university recommendation \
                 responses."
                    .to_string(),
                "Built systems to analyze user intentions and suggest universities based on \
                 courses, fees, and scholarships."
                    .to_string(),
            ],
            link: None,
        },
        Experience {
            company: "U R Rao Satellite Center - ISRO".to_string(),
            role: "Intern".to_string(),
            period: "Jan 2025 – Mar 2025".to_string(),
            location: "Bengaluru, Karnataka".to_string(),
            bullets: vec![
                "Researched quantum algorithms for phase estimation; developed a comparative \
                 study between classical and quantum methods."
                    .to_string(),
                "Developed 'Shakers' Android app for real-time payload testing identification \
                 at the Vibration lab."
                    .to_string(),
            ],
            link: None,
        },
    ]
}

fn builtin_projects() -> Vec<Project> {
    vec![
        Project {
            title: "GreenLoop".to_string(),
            description: "GreenLoop is a Smart Cloud based AI powered waste reporting and \
                          management system. GreenLoop addresses the inefficiencies in waste \
                          management by utilizing advanced technologies to streamline reporting, \
                          enhance tracking, and facilitate communication between residents and \
                          waste management authorities."
                .to_string(),
            tags: vec![
                "Cloud".to_string(),
                "AI".to_string(),
                "Sustainability".to_string(),
            ],
            link: Some(
                "https://cloudproject-xw8tqqs7x6t2jnyw2ug87l.streamlit.app/".to_string(),
            ),
            github: None,
            image: Some("/projects/green_loop.png".to_string()),
        },
        Project {
            title: "Predicting Problematic Internet Usage in Youth".to_string(),
            description: "Developed a predictive framework for detecting problematic internet \
                          use. Utilized multimodal physical activity data from the Healthy Brain \
                          Network dataset. Modelled the Severity Impairment Index using advanced \
                          deep learning techniques and customized neural network. Work registered \
                          for copyright."
                .to_string(),
            tags: vec![
                "Predictive Analytics".to_string(),
                "HealthTech".to_string(),
                "Python".to_string(),
            ],
            link: Some(
                "https://drive.google.com/file/d/1L1rfOmepOQGuzSfoAz6Xsuz3x3YGY7jh/view"
                    .to_string(),
            ),
            github: None,
            image: Some("/projects/problematic_internet.jpg".to_string()),
        },
        Project {
            title: "Verbal Ability Grading System".to_string(),
            description: "Designed an AI-driven assessment tool for evaluating verbal \
                          communication skills using speech input. Implemented modules for speech \
                          recognition, text/audio analysis, scoring, and feedback generation to \
                          provide graded performance reports."
                .to_string(),
            tags: vec![
                "Speech AI".to_string(),
                "NLP".to_string(),
                "Python".to_string(),
                "Grading System".to_string(),
            ],
            link: None,
            github: Some(
                "https://github.com/spandana2004/Verbal-Ability-Grading-System".to_string(),
            ),
            image: Some("/projects/verbal_ability.jpg".to_string()),
        },
        Project {
            title: "Fake Video Detection (DL)".to_string(),
            description: "Deep Learning based system to identify manipulated video content \
                          (deepfakes) using advanced spatial-temporal feature analysis and \
                          convolutional neural networks."
                .to_string(),
            tags: vec![
                "Deep Learning".to_string(),
                "Computer Vision".to_string(),
                "Security".to_string(),
            ],
            link: None,
            github: Some(
                "https://github.com/spandana2004/Computer-Vision-Projects/tree/main/Deep-Fake-Video-Detection"
                    .to_string(),
            ),
            image: Some("/projects/fake_video.jpg".to_string()),
        },
        Project {
            title: "Campus Placement Patterns".to_string(),
            description: "Applied ML algorithms to analyze placement data and generate career \
                          insights. Published in IJEME journal."
                .to_string(),
            tags: vec![
                "ML".to_string(),
                "Data Analysis".to_string(),
                "Python".to_string(),
            ],
            link: None,
            github: Some(
                "https://github.com/spandana2004/SBSPS-Challenge-10196-1690824000".to_string(),
            ),
            image: Some("/projects/campus_placement.jpg".to_string()),
        },
        Project {
            title: "Proactive Dropout Mitigation".to_string(),
            description: "Full-stack Student Management System with 94% accuracy in identifying \
                          potential dropouts. Presented at IITCEE."
                .to_string(),
            tags: vec![
                "Full Stack".to_string(),
                "Predictive Modeling".to_string(),
                "Education".to_string(),
            ],
            link: None,
            github: Some(
                "https://github.com/spandana2004/Proactive-Dropout-Mitigation-of-School-Students"
                    .to_string(),
            ),
            image: Some("/projects/school_drop.jpg".to_string()),
        },
    ]
}

fn builtin_skills() -> Vec<SkillCategory> {
    vec![
        SkillCategory {
            category: "AI/ML & Data Science".to_string(),
            items: vec![
                "Gen-AI".to_string(),
                "Machine Learning".to_string(),
                "Deep Learning".to_string(),
                "NLP".to_string(),
                "TensorFlow".to_string(),
                "Keras".to_string(),
                "Scikit-learn".to_string(),
                "Pandas".to_string(),
                "NumPy".to_string(),
                "RL".to_string(),
            ],
        },
        SkillCategory {
            category: "Programming".to_string(),
            items: vec!["Python".to_string(), "Java".to_string(), "C".to_string()],
        },
        SkillCategory {
            category: "Web & Database".to_string(),
            items: vec![
                "MySQL".to_string(),
                "MongoDB".to_string(),
                "Streamlit".to_string(),
                "React".to_string(),
                "Node.js".to_string(),
            ],
        },
        SkillCategory {
            category: "Core Computer Science".to_string(),
            items: vec![
                "Data Structures".to_string(),
                "Algorithms".to_string(),
                "Quantum Computing Foundations".to_string(),
            ],
        },
    ]
}

fn builtin_publications() -> Vec<Publication> {
    vec![
        Publication {
            title: "NetAware: Activity-Based Prediction of Internet Misuse".to_string(),
            description: "Registered under Indian Copyright (ROC).".to_string(),
            year: "2025".to_string(),
            doi: Some("SW-17842/2025".to_string()),
        },
        Publication {
            title: "Multi-Modal Data Exploration and Analysis for Predicting Severity \
                    Impairment Index Using Actigraphy and Behavioral Metrics"
                .to_string(),
            description: "ICCTDC-2025, Hassan, India, pp. 1-5.".to_string(),
            year: "2025".to_string(),
            doi: Some("10.1109/ICCTDC64446.2025.11158835".to_string()),
        },
        Publication {
            title: "Identifying Patterns and Trends in Campus Placement Data Using Machine \
                    Learning"
                .to_string(),
            description: "International Journal of Education and Management Engineering (IJEME), \
                          Vol.15, No.1, pp. 10-24."
                .to_string(),
            year: "2025".to_string(),
            doi: Some("10.5815/ijeme.2025.01.02".to_string()),
        },
        Publication {
            title: "Soft Alert Generation for Student Dropout Mitigation and Proactive \
                    Management by Machine Learning Algorithm"
                .to_string(),
            description: "Presented at IITCEE - Jan 16, 2025.".to_string(),
            year: "2025".to_string(),
            doi: Some("10.1109/IITCEE64140.2025.10915221".to_string()),
        },
        Publication {
            title: "A Survey on the Usage of Numerous ML Models for Agriculture".to_string(),
            description: "Presented at IITCEE - Mar 20, 2024.".to_string(),
            year: "2024".to_string(),
            doi: Some("10.1109/IITCEE.2024.10821".to_string()),
        },
        Publication {
            title: "Real-time Structural Health Monitoring System using IOT".to_string(),
            description: "Book: Futuristic Trends in IOT, IIP Series.".to_string(),
            year: "2024".to_string(),
            doi: Some("(e-ISBN) 978-93-6252-126-2".to_string()),
        },
    ]
}

fn builtin_achievements() -> Vec<Achievement> {
    vec![
        Achievement {
            title: "Finalist - Matrix Forum".to_string(),
            org: "TiE Global Summit".to_string(),
            date: "2024".to_string(),
            description: "Shortlisted as a finalist for innovative problem-solving in the \
                          prestigious global summit."
                .to_string(),
        },
        Achievement {
            title: "Runner-up - AI Hackathon".to_string(),
            org: "Pantech e Learning".to_string(),
            date: "2024".to_string(),
            description: "Project titled 'Cervical Cancer Prediction' using AI models."
                .to_string(),
        },
        Achievement {
            title: "Runner-up - IEEE Project Competition".to_string(),
            org: "IEEE Bangalore Section".to_string(),
            date: "2024".to_string(),
            description: "Recognized for 'Proactive Dropout Mitigation' system among 100+ \
                          competing technical projects."
                .to_string(),
        },
        Achievement {
            title: "Merit Scholarship Recipient".to_string(),
            org: "BNMIT".to_string(),
            date: "2022".to_string(),
            description: "Awarded for consistent academic excellence and maintaining high \
                          academic standards."
                .to_string(),
        },
    ]
}

fn builtin_certifications() -> Vec<Certification> {
    vec![
        Certification {
            name: "Ai Business Intelligence Analyst".to_string(),
            issuer: "NCVET, MSDE, Govt. of India".to_string(),
            link: Some(
                "https://drive.google.com/file/d/1FZ3k8lEpNwukic1K6LA5Edr8UJzarXVo/view"
                    .to_string(),
            ),
        },
        Certification {
            name: "Machine Learning for Engineering and Science Applications".to_string(),
            issuer: "NPTEL (IITM)".to_string(),
            link: Some(
                "https://drive.google.com/file/d/1Uc7sO2H7lMH5Tydj_cP4_sMuBGp154pi/view"
                    .to_string(),
            ),
        },
        Certification {
            name: "Android Application Development".to_string(),
            issuer: "Great Learning".to_string(),
            link: Some(
                "https://drive.google.com/file/d/1AjaELiJhEefB3_RoFa4jRTbJH01iOuML/view"
                    .to_string(),
            ),
        },
        Certification {
            name: "The Complete Prompt Engineering for AI Bootcamp (2025)".to_string(),
            issuer: "Udemy".to_string(),
            link: Some(
                "https://drive.google.com/file/d/1rv97DDiYwgS4aAV9168TFwz-ETd5ufEx/view?usp=sharing"
                    .to_string(),
            ),
        },
        Certification {
            name: "Java Servlet Basics and JSP 101".to_string(),
            issuer: "Simplilearn".to_string(),
            link: Some(
                "https://drive.google.com/file/d/1UiZ_KTIQZzvWJsSHpyK-9uawPZSDcLz-/view"
                    .to_string(),
            ),
        },
        Certification {
            name: "Artificial Intelligence for Economics".to_string(),
            issuer: "NPTEL (IITK)".to_string(),
            link: Some(
                "https://drive.google.com/file/d/1rOHuKDIbH-Yc7Xl4PNM93TwOEw_BdG0H/view?usp=drive_link"
                    .to_string(),
            ),
        },
    ]
}

fn builtin_education() -> Vec<EducationEntry> {
    vec![
        EducationEntry {
            school: "B N M Institute of Technology".to_string(),
            degree: "B.E in Computer Science & Engineering".to_string(),
            period: "Present".to_string(),
            location: "Bengaluru, Karnataka".to_string(),
            details: "9.63 CGPA".to_string(),
        },
        EducationEntry {
            school: "Deeksha C F L PU College".to_string(),
            degree: "Pre-University (PCMC)".to_string(),
            period: "2020 – 2022".to_string(),
            location: "Bengaluru, Karnataka".to_string(),
            details: "94.5%".to_string(),
        },
        EducationEntry {
            school: "S J R Kengeri Public School".to_string(),
            degree: "10th Board in ICSE".to_string(),
            period: "2008 – 2020".to_string(),
            location: "Bengaluru, Karnataka".to_string(),
            details: "95%".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_store_is_valid() {
        let store = ContentStore::builtin();
        store.validate().unwrap();

        assert_eq!(store.experiences.len(), 5);
        assert_eq!(store.projects.len(), 6);
        assert_eq!(store.skills.len(), 4);
        assert_eq!(store.publications.len(), 6);
        assert_eq!(store.achievements.len(), 4);
        assert_eq!(store.certifications.len(), 6);
        assert_eq!(store.education.len(), 3);
    }

    #[test]
    fn test_validate_rejects_empty_bullets() {
        let mut store = ContentStore::builtin();
        store.experiences[0].bullets.clear();
        assert!(store.validate().is_err());
    }

    #[test]
    fn test_store_roundtrips_through_json() {
        let store = ContentStore::builtin();
        let json = serde_json::to_string(&store).unwrap();
        let parsed: ContentStore = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, store);
    }

    #[test]
    fn test_from_file() -> crate::Result<()> {
        let temp_dir = tempfile::tempdir()?;
        let path = temp_dir.path().join("profile.json");
        let store = ContentStore::builtin();
        std::fs::write(&path, serde_json::to_string_pretty(&store)?)?;

        let loaded = ContentStore::from_file(&path)?;
        assert_eq!(loaded, store);
        Ok(())
    }
}
