//! Technology icon lookup.
//!
//! Icons come from the devicon CDN by technology name; technologies
//! without a published icon fall back to an initials badge at the call
//! site.

/// CDN icon URL for a technology name, if one exists.
pub fn icon_url(name: &str) -> Option<&'static str> {
    let url = match name {
        "Python" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/python/python-original.svg",
        "Java" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/java/java-original.svg",
        "C" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/c/c-original.svg",
        "MySQL" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/mysql/mysql-original.svg",
        "MongoDB" => {
            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/mongodb/mongodb-original.svg"
        }
        "React" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/react/react-original.svg",
        "Node.js" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/nodejs/nodejs-original.svg",
        "TensorFlow" => {
            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/tensorflow/tensorflow-original.svg"
        }
        "Keras" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/keras/keras-original.svg",
        "Scikit-learn" => {
            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/scikitlearn/scikitlearn-original.svg"
        }
        "Pandas" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/pandas/pandas-original.svg",
        "NumPy" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/numpy/numpy-original.svg",
        "Streamlit" => "https://streamlit.io/images/brand/streamlit-mark-color.svg",
        _ => return None,
    };
    Some(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_technologies_have_icons() {
        assert!(icon_url("Python").is_some());
        assert!(icon_url("Streamlit").is_some());
        assert!(icon_url("TensorFlow").is_some());
    }

    #[test]
    fn test_conceptual_skills_have_no_icon() {
        assert!(icon_url("Machine Learning").is_none());
        assert!(icon_url("Gen-AI").is_none());
        assert!(icon_url("Quantum Computing Foundations").is_none());
        assert!(icon_url("").is_none());
    }
}
