/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Static site copy as typed constants.
//!
//! Everything rendered on the page that is not user state lives here, so
//! sections stay markup-only and the invariants (unique ids, fixed slide
//! count) can be checked in tests.

/// In-page anchors the navbar and footer link to.
pub static NAV_LINKS: [(&str, &str); 5] = [
    ("Features", "#features"),
    ("Blog", "#blog"),
    ("Pricing", "#pricing"),
    ("Testimonials", "#testimonials"),
    ("FAQ", "#faq"),
];

pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub image: &'static str,
    pub quote: &'static str,
    pub rating: u8,
}

pub static TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        id: 1,
        name: "Sarah Chen",
        role: "Marketing Director",
        company: "TechFlow Inc",
        image: "https://images.unsplash.com/photo-1607746882042-944635dfe10e?w=400&h=400&fit=crop&crop=face",
        quote: "ADmyBRAND AI Suite revolutionized our marketing strategy. We saw a 300% increase in engagement within the first month. The AI insights are incredibly accurate and actionable.",
        rating: 5,
    },
    Testimonial {
        id: 2,
        name: "Michael Rodriguez",
        role: "CEO",
        company: "Digital Dynamics",
        image: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=400&h=400&fit=crop&crop=face",
        quote: "The automation capabilities saved us 40 hours per week. Our team can now focus on creative strategy while the AI handles the repetitive tasks perfectly.",
        rating: 5,
    },
    Testimonial {
        id: 3,
        name: "Emily Johnson",
        role: "Brand Manager",
        company: "Creative Solutions",
        image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=400&h=400&fit=crop&crop=face",
        quote: "Incredible ROI! Our ad spend efficiency improved by 250%. The predictive analytics helped us identify high-value customers we never knew existed.",
        rating: 5,
    },
    Testimonial {
        id: 4,
        name: "David Park",
        role: "Growth Hacker",
        company: "StartupBoost",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=400&fit=crop&crop=face",
        quote: "Game-changing tool for startups. The AI-driven content creation is spot-on, and the customer segmentation features are incredibly sophisticated yet easy to use.",
        rating: 5,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaqCategory {
    General,
    Features,
    Pricing,
    Technical,
}

impl FaqCategory {
    pub fn label(self) -> &'static str {
        match self {
            FaqCategory::General => "General",
            FaqCategory::Features => "Features",
            FaqCategory::Pricing => "Pricing",
            FaqCategory::Technical => "Technical",
        }
    }
}

pub struct FaqEntry {
    pub id: u32,
    pub category: FaqCategory,
    pub question: &'static str,
    pub answer: &'static str,
}

pub static FAQS: [FaqEntry; 8] = [
    FaqEntry {
        id: 1,
        category: FaqCategory::General,
        question: "What is ADmyBRAND AI Suite?",
        answer: "ADmyBRAND AI Suite is a comprehensive AI-powered marketing platform that helps businesses automate their marketing campaigns, analyze customer data, create personalized content, and optimize ad performance across multiple channels.",
    },
    FaqEntry {
        id: 2,
        category: FaqCategory::Features,
        question: "How does the AI content generation work?",
        answer: "Our advanced AI analyzes your brand voice, target audience, and campaign objectives to generate compelling copy, social media posts, email campaigns, and ad creatives. The AI learns from your feedback and continuously improves to match your brand perfectly.",
    },
    FaqEntry {
        id: 3,
        category: FaqCategory::Technical,
        question: "What integrations are supported?",
        answer: "We integrate with 100+ platforms including Google Ads, Facebook Ads, Instagram, LinkedIn, Twitter, Shopify, WooCommerce, Mailchimp, HubSpot, Salesforce, and many more. Our API also allows custom integrations.",
    },
    FaqEntry {
        id: 4,
        category: FaqCategory::Pricing,
        question: "Can I change my plan anytime?",
        answer: "Yes! You can upgrade, downgrade, or cancel your plan at any time. Upgrades take effect immediately, while downgrades take effect at the end of your current billing cycle. No long-term contracts required.",
    },
    FaqEntry {
        id: 5,
        category: FaqCategory::General,
        question: "Is my data secure?",
        answer: "Absolutely. We use enterprise-grade security with AES-256 encryption, SOC 2 compliance, and GDPR compliance. Your data is never shared with third parties and is stored in secure, geographically distributed data centers.",
    },
    FaqEntry {
        id: 6,
        category: FaqCategory::Features,
        question: "How accurate are the AI predictions?",
        answer: "Our AI models achieve 92% accuracy in customer behavior prediction and 87% in campaign performance forecasting. The accuracy improves over time as the AI learns from your specific data patterns and campaign results.",
    },
    FaqEntry {
        id: 7,
        category: FaqCategory::Technical,
        question: "Do you offer API access?",
        answer: "Yes, we provide comprehensive REST APIs and webhooks for all Pro and Enterprise plans. Our API documentation includes SDKs for popular programming languages and detailed integration guides.",
    },
    FaqEntry {
        id: 8,
        category: FaqCategory::Pricing,
        question: "Is there a free trial?",
        answer: "Yes! We offer a 14-day free trial with full access to all features. No credit card required to start. You can test all capabilities and see real results before making any commitment.",
    },
];

pub struct Resource {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub category: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
    pub comments: u32,
    pub author: &'static str,
    pub video_url: Option<&'static str>,
}

/// Fixed promotional video and its poster frame, consumed as opaque URLs.
pub const FEATURED_VIDEO_URL: &str =
    "https://cdn.pixabay.com/vimeo/627145886/Business-Team-Meeting-Recording-0-10sec.mp4";
pub const FEATURED_VIDEO_POSTER: &str =
    "https://images.unsplash.com/photo-1551288049-bebda4e38f71?ixlib=rb-4.0.3&auto=format&fit=crop&w=2070&q=80";

pub static RESOURCES: [Resource; 4] = [
    Resource {
        title: "The Future of AI in Digital Marketing",
        excerpt: "Explore how AI is revolutionizing customer engagement and marketing strategies in 2025.",
        category: "AI Trends",
        date: "May 15, 2025",
        read_time: "8 min read",
        comments: 12,
        author: "Sarah Chen",
        video_url: Some(FEATURED_VIDEO_URL),
    },
    Resource {
        title: "10 Ways to Boost Your Conversion Rates",
        excerpt: "Proven strategies to increase your website conversions using behavioral psychology.",
        category: "Growth",
        date: "April 28, 2025",
        read_time: "6 min read",
        comments: 8,
        author: "Michael Rodriguez",
        video_url: None,
    },
    Resource {
        title: "Mastering Marketing Automation",
        excerpt: "How to set up efficient workflows that save time and increase revenue.",
        category: "Automation",
        date: "April 10, 2025",
        read_time: "10 min read",
        comments: 15,
        author: "Emma Johnson",
        video_url: None,
    },
    Resource {
        title: "The Complete Guide to Customer Segmentation",
        excerpt: "Learn how to divide your audience for hyper-targeted campaigns.",
        category: "Strategy",
        date: "March 22, 2025",
        read_time: "12 min read",
        comments: 5,
        author: "David Park",
        video_url: None,
    },
];

pub struct FeatureCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub highlight: bool,
}

pub static FEATURES: [FeatureCard; 9] = [
    FeatureCard {
        icon: "bot",
        title: "AI Content Generation",
        description: "Automatically create high-quality marketing copy, blogs, and social posts with our advanced AI models.",
        highlight: true,
    },
    FeatureCard {
        icon: "chart",
        title: "Real-time Analytics",
        description: "Track campaign performance with beautiful dashboards and actionable insights.",
        highlight: false,
    },
    FeatureCard {
        icon: "cpu",
        title: "Predictive Analytics",
        description: "Forecast customer behavior and campaign outcomes with 95% accuracy.",
        highlight: true,
    },
    FeatureCard {
        icon: "dashboard",
        title: "Unified Dashboard",
        description: "Manage all your marketing channels from one intuitive control panel.",
        highlight: false,
    },
    FeatureCard {
        icon: "database",
        title: "Data Integration",
        description: "Connect all your data sources with our 100+ native integrations.",
        highlight: true,
    },
    FeatureCard {
        icon: "zap",
        title: "Smart Automation",
        description: "Set up complex workflows with our no-code automation builder.",
        highlight: false,
    },
    FeatureCard {
        icon: "globe",
        title: "Multi-channel",
        description: "Publish and track across all platforms simultaneously.",
        highlight: false,
    },
    FeatureCard {
        icon: "lock",
        title: "Enterprise Security",
        description: "SOC 2 Type II compliant with end-to-end encryption.",
        highlight: true,
    },
    FeatureCard {
        icon: "users",
        title: "Team Collaboration",
        description: "Real-time collaboration tools for your entire marketing team.",
        highlight: false,
    },
];

/// Icon + label chips shown under the hero headline.
pub static HERO_FEATURES: [(&str, &str); 6] = [
    ("bot", "AI Content Generation"),
    ("chart", "Analytics Dashboard"),
    ("cpu", "Predictive Analytics"),
    ("dashboard", "Campaign Manager"),
    ("database", "Data Integration"),
    ("zap", "Automation Workflows"),
];

pub struct FooterSection {
    pub title: &'static str,
    pub links: &'static [(&'static str, &'static str)],
}

pub static FOOTER_SECTIONS: [FooterSection; 3] = [
    FooterSection {
        title: "Product",
        links: &[
            ("Features", "#features"),
            ("Pricing", "#pricing"),
            ("Integrations", "#"),
            ("Roadmap", "#"),
        ],
    },
    FooterSection {
        title: "Resources",
        links: &[
            ("Documentation", "#"),
            ("API Reference", "#"),
            ("Guides", "#"),
            ("Blog", "#blog"),
        ],
    },
    FooterSection {
        title: "Company",
        links: &[
            ("About", "#"),
            ("Careers", "#"),
            ("Contact", "#contact"),
            ("Legal", "#"),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_testimonial_ids_are_unique_and_count_matches_carousel() {
        let mut ids: Vec<_> = TESTIMONIALS.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), TESTIMONIALS.len());
        assert_eq!(TESTIMONIALS.len(), 4);
    }

    #[test]
    fn test_faq_ids_are_unique() {
        let mut ids: Vec<_> = FAQS.iter().map(|f| f.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), FAQS.len());
    }

    #[test]
    fn test_only_the_featured_resource_carries_a_video() {
        assert!(RESOURCES[0].video_url.is_some());
        assert!(RESOURCES[1..].iter().all(|r| r.video_url.is_none()));
    }

    #[test]
    fn test_nav_links_are_in_page_anchors() {
        assert!(NAV_LINKS.iter().all(|(_, href)| href.starts_with('#')));
    }
}
