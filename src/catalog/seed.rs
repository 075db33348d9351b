//! Built-in sample catalog: the twelve posts published on the site.

use chrono::NaiveDate;

use super::types::{Category, Post};

const TEAM: &str = "Vaidyog Team";

const IMG_DOCTOR: &str = "https://images.unsplash.com/photo-1537368910025-700350fe46c7?ixlib=rb-4.0.3&auto=format&fit=crop&w=100&q=80";
const IMG_NURSE: &str = "https://images.unsplash.com/photo-1582750433449-648ed127bb54?ixlib=rb-4.0.3&auto=format&fit=crop&w=100&q=80";
const IMG_HR: &str = "https://images.unsplash.com/photo-1560250097-0b93528c311a?ixlib=rb-4.0.3&auto=format&fit=crop&w=100&q=80";
const IMG_STUDENT: &str = "https://images.unsplash.com/photo-1559839734-2b71ea197ec2?ixlib=rb-4.0.3&auto=format&fit=crop&w=100&q=80";
const IMG_SURGEON: &str = "https://images.unsplash.com/photo-1612349317150-e413f6a5b16d?ixlib=rb-4.0.3&auto=format&fit=crop&w=100&q=80";

struct SeedPost {
    id: i64,
    title: &'static str,
    excerpt: &'static str,
    category: Category,
    read_time: u32,
    author: &'static str,
    author_img: &'static str,
    /// Day of February 2026.
    day: u32,
    featured: bool,
    url: &'static str,
}

const SEED: [SeedPost; 12] = [
    SeedPost {
        id: 1,
        title: "How to Negotiate Your Doctor Salary in 2026",
        excerpt: "Learn proven strategies for MBBS doctors and specialists to maximize earning potential in private and government hospitals across India.",
        category: Category::Doctor,
        read_time: 10,
        author: TEAM,
        author_img: IMG_DOCTOR,
        day: 10,
        featured: true,
        url: "blogs/doctor-salary.html",
    },
    SeedPost {
        id: 2,
        title: "Nursing Career Guide 2026: Complete Salary, Specializations & Path",
        excerpt: "Complete nursing career guide 2026: GNM/B.Sc salaries ₹2.5-6 LPA, MSc Nursing ₹5-12 LPA, specializations breakdown, government vs private comparison & career advancement tips by Vaidyog Team.",
        category: Category::Nursing,
        read_time: 12,
        author: TEAM,
        author_img: IMG_NURSE,
        day: 12,
        featured: true,
        url: "blogs/nursing-career-guide-2026.html",
    },
    SeedPost {
        id: 3,
        title: "Top 50 Medical Interview Questions for 2026",
        excerpt: "Comprehensive guide with sample answers for doctors, nurses and technicians preparing for hospital interviews.",
        category: Category::Hospital,
        read_time: 10,
        author: TEAM,
        author_img: IMG_HR,
        day: 17,
        featured: true,
        url: "blogs/top-50-medical-interview-questions.html",
    },
    SeedPost {
        id: 4,
        title: "NEET PG 2026: Complete Preparation Strategy",
        excerpt: "Month-by-month study plan, important topics, and time management tips for NEET PG aspirants aiming for top ranks.",
        category: Category::Education,
        read_time: 15,
        author: TEAM,
        author_img: IMG_STUDENT,
        day: 18,
        featured: true,
        url: "blogs/neet-pg-2026-preparation-strategy.html",
    },
    SeedPost {
        id: 5,
        title: "Private vs Government Hospital Jobs: Pros & Cons",
        excerpt: "Detailed comparison of salary, work-life balance, career growth, and job security in India's healthcare sector.",
        category: Category::Doctor,
        read_time: 11,
        author: TEAM,
        author_img: IMG_SURGEON,
        day: 19,
        featured: true,
        url: "blogs/private-vs-government-hospital-jobs.html",
    },
    SeedPost {
        id: 6,
        title: "Abroad Nursing Jobs: UK, USA, Middle East Guide",
        excerpt: "Requirements, salary packages, and application process for Indian nurses seeking international career opportunities.",
        category: Category::Nursing,
        read_time: 5,
        author: TEAM,
        author_img: IMG_STUDENT,
        day: 21,
        featured: true,
        url: "blogs/abroad-nursing-jobs-guide.html",
    },
    SeedPost {
        id: 7,
        title: "Medical Specialization Guide: Choosing the Right Path",
        excerpt: "How to choose between cardiology, neurology, orthopedics and other medical specializations based on your interests and market demand.",
        category: Category::Doctor,
        read_time: 9,
        author: TEAM,
        author_img: IMG_DOCTOR,
        day: 23,
        featured: false,
        url: "blogs/medical-specialization-guide.html",
    },
    SeedPost {
        id: 8,
        title: "Nursing Salary Guide 2026: India vs Abroad",
        excerpt: "Comprehensive salary comparison for staff nurses, ICU nurses, and nursing superintendents across different countries.",
        category: Category::Nursing,
        read_time: 7,
        author: TEAM,
        author_img: IMG_NURSE,
        day: 24,
        featured: false,
        url: "blogs/nursing-salary-guide-2026.html",
    },
    SeedPost {
        id: 9,
        title: "Hospital Management Careers: MBA vs MHA",
        excerpt: "Which degree is better for hospital administration roles? Complete comparison of career paths, salaries, and opportunities.",
        category: Category::Hospital,
        read_time: 11,
        author: "Arun Sharma",
        author_img: IMG_HR,
        day: 22,
        featured: false,
        url: "blogs/hospital-management.html",
    },
    SeedPost {
        id: 10,
        title: "AIIMS vs Private Medical Colleges: Career Impact",
        excerpt: "How your medical college affects residency opportunities, specialization choices, and long-term career growth.",
        category: Category::Education,
        read_time: 8,
        author: "Dr. Meena Reddy",
        author_img: IMG_STUDENT,
        day: 20,
        featured: false,
        url: "blogs/medical-colleges.html",
    },
    SeedPost {
        id: 11,
        title: "Surgeon Career Guide: From Resident to Consultant",
        excerpt: "Step-by-step guide to becoming a successful surgeon, including training requirements and subspecialization options.",
        category: Category::Doctor,
        read_time: 10,
        author: "Dr. Vikram Singh",
        author_img: IMG_SURGEON,
        day: 18,
        featured: false,
        url: "blogs/surgeon-career.html",
    },
    SeedPost {
        id: 12,
        title: "Medical Coding Jobs: New Career Opportunities",
        excerpt: "Complete guide to medical coding careers, certification requirements, salary expectations, and job market trends.",
        category: Category::Hospital,
        read_time: 6,
        author: "Neha Gupta",
        author_img: IMG_NURSE,
        day: 15,
        featured: false,
        url: "blogs/medical-coding.html",
    },
];

/// Materialize the seed table as owned posts, in seed order.
pub(super) fn sample_posts() -> Vec<Post> {
    SEED.iter()
        .map(|seed| Post {
            id: seed.id,
            title: seed.title.to_string(),
            excerpt: seed.excerpt.to_string(),
            author: seed.author.to_string(),
            author_img: Some(seed.author_img.to_string()),
            category: seed.category,
            category_name: seed.category.label().to_string(),
            read_time: seed.read_time,
            // Every seed day is a valid February date.
            date: NaiveDate::from_ymd_opt(2026, 2, seed.day).unwrap_or_default(),
            featured: seed.featured,
            url: seed.url.to_string(),
        })
        .collect()
}
