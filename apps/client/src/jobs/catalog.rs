//! Built-in job catalog shown by the job search.

use crate::models::job::Job;

struct Seed {
    id: &'static str,
    title: &'static str,
    company: &'static str,
    location: &'static str,
    email: &'static str,
    latitude: f64,
    longitude: f64,
    description: &'static str,
    skills: &'static [&'static str],
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "1",
        title: "Software Engineer",
        company: "TechCorp",
        location: "New York, NY, USA",
        email: "hr@techcorp.com",
        latitude: 40.7128,
        longitude: -74.006,
        description: "Develop and maintain software applications.",
        skills: &["JavaScript", "React", "Node.js"],
    },
    Seed {
        id: "2",
        title: "Frontend Developer",
        company: "WebSolutions",
        location: "San Francisco, CA, USA",
        email: "jobs@websolutions.com",
        latitude: 37.7749,
        longitude: -122.4194,
        description: "Work on frontend development and UI/UX design.",
        skills: &["HTML", "CSS", "React", "JavaScript"],
    },
    Seed {
        id: "3",
        title: "Backend Developer",
        company: "DevWorks",
        location: "Remote",
        email: "careers@devworks.com",
        latitude: 0.0,
        longitude: 0.0,
        description: "Design and implement backend systems.",
        skills: &["Python", "Django", "SQL"],
    },
    Seed {
        id: "4",
        title: "Mobile App Developer",
        company: "Sousse Tech Solutions",
        location: "Sousse, Tunisia",
        email: "recruit@soussetech.com",
        latitude: 35.8256,
        longitude: 10.6369,
        description: "Develop innovative mobile applications.",
        skills: &["React Native", "Java", "Swift"],
    },
    Seed {
        id: "5",
        title: "Data Analyst",
        company: "AnalyticsPro",
        location: "Tunis, Tunisia",
        email: "jobs@analyticspro.com",
        latitude: 36.8065,
        longitude: 10.1815,
        description: "Analyze datasets to extract meaningful insights.",
        skills: &["Python", "SQL", "Tableau"],
    },
    Seed {
        id: "6",
        title: "Machine Learning Engineer",
        company: "AI Labs",
        location: "Berlin, Germany",
        email: "careers@ailabs.de",
        latitude: 52.52,
        longitude: 13.405,
        description: "Develop and optimize machine learning models.",
        skills: &["Python", "TensorFlow", "PyTorch"],
    },
    Seed {
        id: "7",
        title: "DevOps Engineer",
        company: "CloudWorks",
        location: "Paris, France",
        email: "hr@cloudworks.fr",
        latitude: 48.8566,
        longitude: 2.3522,
        description: "Implement and maintain CI/CD pipelines.",
        skills: &["Docker", "Kubernetes", "AWS"],
    },
    Seed {
        id: "8",
        title: "Full Stack Developer",
        company: "MENA Innovators",
        location: "Dubai, UAE",
        email: "apply@mena-innovators.com",
        latitude: 25.276987,
        longitude: 55.296249,
        description: "Develop and maintain full-stack applications.",
        skills: &["Angular", "Node.js", "MongoDB"],
    },
    Seed {
        id: "9",
        title: "Cybersecurity Specialist",
        company: "SecuriTech",
        location: "London, UK",
        email: "jobs@securitech.co.uk",
        latitude: 51.5074,
        longitude: -0.1278,
        description: "Ensure the security of IT systems and data.",
        skills: &["Ethical Hacking", "Firewall", "SIEM"],
    },
    Seed {
        id: "10",
        title: "AI Researcher",
        company: "DeepMind",
        location: "Montreal, Canada",
        email: "careers@deepmind.ca",
        latitude: 45.5017,
        longitude: -73.5673,
        description: "Research advanced AI techniques and algorithms.",
        skills: &["Python", "AI", "Deep Learning"],
    },
    Seed {
        id: "11",
        title: "Frontend Developer",
        company: "UI Experts",
        location: "Hammamet, Tunisia",
        email: "hr@uiexperts.com",
        latitude: 36.4011,
        longitude: 10.6168,
        description: "Design and implement modern UI/UX solutions.",
        skills: &["CSS", "JavaScript", "React"],
    },
    Seed {
        id: "12",
        title: "Blockchain Developer",
        company: "CryptoWorld",
        location: "Zurich, Switzerland",
        email: "jobs@cryptoworld.ch",
        latitude: 47.3769,
        longitude: 8.5417,
        description: "Develop blockchain applications and smart contracts.",
        skills: &["Solidity", "Ethereum", "Hyperledger"],
    },
    Seed {
        id: "13",
        title: "IT Support Technician",
        company: "Global IT Solutions",
        location: "Sousse, Tunisia",
        email: "support@globalit.tn",
        latitude: 35.8256,
        longitude: 10.6369,
        description: "Provide technical support for IT systems.",
        skills: &["Windows", "Linux", "Networking"],
    },
];

/// The catalog in its source order, without distances.
pub fn sample_jobs() -> Vec<Job> {
    SEEDS
        .iter()
        .map(|s| Job {
            id: s.id.to_string(),
            title: s.title.to_string(),
            company: s.company.to_string(),
            location: s.location.to_string(),
            email: s.email.to_string(),
            latitude: s.latitude,
            longitude: s.longitude,
            description: s.description.to_string(),
            skills: s.skills.iter().map(|k| k.to_string()).collect(),
            distance: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_thirteen_unique_jobs() {
        let jobs = sample_jobs();
        assert_eq!(jobs.len(), 13);
        let ids: HashSet<_> = jobs.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids.len(), 13);
    }

    #[test]
    fn test_catalog_has_no_distances_before_ranking() {
        assert!(sample_jobs().iter().all(|j| j.distance.is_none()));
    }

    #[test]
    fn test_catalog_coordinates_are_valid() {
        assert!(sample_jobs().iter().all(|j| j.position().validate().is_ok()));
    }
}
