use common::JobListing;

/// The fixed substitute listings served whenever the live fetch fails or
/// matches zero rows. Hand-authored, stable order, no network, no
/// randomness.
pub fn fallback_listings() -> Vec<JobListing> {
    vec![
        JobListing {
            title: "Frontend Developer".to_string(),
            company: "TechNova".to_string(),
            location: "Remote / India".to_string(),
            salary: "₹8–15 LPA".to_string(),
            description: "Work with React and modern frontend tools to build amazing user experiences.".to_string(),
            link: "#".to_string(),
            image: "https://cdn-icons-png.flaticon.com/512/1055/1055687.png".to_string(),
        },
        JobListing {
            title: "Python Developer".to_string(),
            company: "DataCraft".to_string(),
            location: "Bangalore, India".to_string(),
            salary: "₹10–20 LPA".to_string(),
            description: "Develop backend systems and APIs using Python and Flask.".to_string(),
            link: "#".to_string(),
            image: "https://cdn-icons-png.flaticon.com/512/5968/5968350.png".to_string(),
        },
        JobListing {
            title: "UI/UX Designer".to_string(),
            company: "DesignFlow".to_string(),
            location: "Remote".to_string(),
            salary: "₹6–12 LPA".to_string(),
            description: "Create user-centered designs and collaborate with developers to improve usability.".to_string(),
            link: "#".to_string(),
            image: "https://cdn-icons-png.flaticon.com/512/2921/2921822.png".to_string(),
        },
        JobListing {
            title: "Data Analyst".to_string(),
            company: "InsightPro".to_string(),
            location: "Mumbai, India".to_string(),
            salary: "₹9–14 LPA".to_string(),
            description: "Analyze datasets to extract insights and improve business decisions.".to_string(),
            link: "#".to_string(),
            image: "https://cdn-icons-png.flaticon.com/512/1048/1048940.png".to_string(),
        },
    ]
}
