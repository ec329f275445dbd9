//! Fixed marketing content: services, testimonials and the project gallery.

use crate::models::{GalleryItem, Service, Testimonial};

pub static SERVICES: [Service; 5] = [
    Service {
        id: "1",
        title: "Tree Removal",
        description: "Safe and efficient removal of trees of any size. We handle dangerous trees, diseased trees, and trees that need to go for construction or landscaping projects.",
        icon: "TreeDeciduous",
        image: "https://images.unsplash.com/photo-1669065054992-3151b15aab08?crop=entropy&cs=srgb&fm=jpg&ixid=M3w4NjA1NTZ8MHwxfHNlYXJjaHwzfHxhcmJvcmlzdCUyMHRyZWUlMjBjbGltYmVyJTIwc2FmZXR5JTIwZ2VhcnxlbnwwfHx8fDE3NzE0ODI5OTR8MA&ixlib=rb-4.1.0&q=85",
    },
    Service {
        id: "2",
        title: "Tree Trimming",
        description: "Expert pruning and trimming to maintain tree health, improve appearance, and prevent hazards. Regular maintenance keeps your trees beautiful and safe.",
        icon: "Scissors",
        image: "https://images.unsplash.com/photo-1765064519883-651c506ec70d?crop=entropy&cs=srgb&fm=jpg&ixid=M3w4NjA1NTZ8MHwxfHNlYXJjaHw0fHxhcmJvcmlzdCUyMHRyZWUlMjBjbGltYmVyJTIwc2FmZXR5JTIwZ2VhcnxlbnwwfHx8fDE3NzE0ODI5OTR8MA&ixlib=rb-4.1.0&q=85",
    },
    Service {
        id: "3",
        title: "Stump Grinding",
        description: "Complete stump removal using professional grinding equipment. Reclaim your yard space and eliminate tripping hazards and pest habitats.",
        icon: "CircleDot",
        image: "https://images.unsplash.com/photo-1617143520628-86934f404d06?crop=entropy&cs=srgb&fm=jpg&ixid=M3w4NjAzNzl8MHwxfHNlYXJjaHwyfHx0cmVlJTIwc3R1bXAlMjBncmluZGluZyUyMG1hY2hpbmUlMjBhY3Rpb258ZW58MHx8fHwxNzcxNDgyOTk4fDA&ixlib=rb-4.1.0&q=85",
    },
    Service {
        id: "4",
        title: "Emergency Services",
        description: "24/7 emergency response for storm damage, fallen trees, and hazardous situations. We're here when you need us most.",
        icon: "AlertTriangle",
        image: "https://images.unsplash.com/photo-1765064520245-2baac5e82689?crop=entropy&cs=srgb&fm=jpg&ixid=M3w4NjA1NTZ8MHwxfHNlYXJjaHwxfHxhcmJvcmlzdCUyMHRyZWUlMjBjbGltYmVyJTIwc2FmZXR5JTIwZ2VhcnxlbnwwfHx8fDE3NzE0ODI5OTR8MA&ixlib=rb-4.1.0&q=85",
    },
    Service {
        id: "5",
        title: "Land Clearing",
        description: "Complete site preparation for construction, landscaping, or agricultural use. We handle projects of any scale with professional equipment.",
        icon: "Mountain",
        image: "https://images.unsplash.com/photo-1642005581880-3536a680febf?crop=entropy&cs=srgb&fm=jpg&ixid=M3w4NjAzNzl8MHwxfHNlYXJjaHwzfHx0cmVlJTIwc3R1bXAlMjBncmluZGluZyUyMG1hY2hpbmUlMjBhY3Rpb258ZW58MHx8fHwxNzcxNDgyOTk4fDA&ixlib=rb-4.1.0&q=85",
    },
];

pub static TESTIMONIALS: [Testimonial; 5] = [
    Testimonial {
        id: "1",
        name: "Sarah Mitchell",
        location: "Portland, OR",
        rating: 5,
        review: "TimberGuard removed a massive oak that was threatening our home. Their crew was professional, efficient, and left our yard spotless. Highly recommend!",
        service: "Tree Removal",
        date: "December 2024",
    },
    Testimonial {
        id: "2",
        name: "James Rodriguez",
        location: "Seattle, WA",
        rating: 5,
        review: "After the storm damaged several trees on our property, TimberGuard was there within hours. Their emergency response team saved us from further damage.",
        service: "Emergency Services",
        date: "November 2024",
    },
    Testimonial {
        id: "3",
        name: "Emily Chen",
        location: "Vancouver, WA",
        rating: 5,
        review: "Professional stump grinding service! They removed five old stumps and now our backyard looks incredible. Fair pricing and excellent work.",
        service: "Stump Grinding",
        date: "October 2024",
    },
    Testimonial {
        id: "4",
        name: "Michael Thompson",
        location: "Eugene, OR",
        rating: 5,
        review: "Regular tree trimming from TimberGuard keeps our property looking pristine. Their arborists really know their craft.",
        service: "Tree Trimming",
        date: "September 2024",
    },
    Testimonial {
        id: "5",
        name: "Lisa Anderson",
        location: "Tacoma, WA",
        rating: 5,
        review: "They cleared 2 acres for our new construction project. Professional, on-time, and within budget. Will use again!",
        service: "Land Clearing",
        date: "August 2024",
    },
];

pub static GALLERY: [GalleryItem; 4] = [
    GalleryItem {
        id: "1",
        title: "Oak Tree Removal",
        description: "Safe removal of a 60-foot oak near residential property",
        image_url: "https://images.unsplash.com/photo-1663697317598-319f0b5ef8b4?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NTY2NzB8MHwxfHNlYXJjaHwxfHxiZWF1dGlmdWwlMjBtYW5pY3VyZWQlMjBiYWNreWFyZCUyMGdhcmRlbiUyMGxhbmRzY2FwZXxlbnwwfHx8fDE3NzE0ODMwMDB8MA&ixlib=rb-4.1.0&q=85",
        category: "Tree Removal",
    },
    GalleryItem {
        id: "2",
        title: "Commercial Land Clearing",
        description: "5-acre commercial site preparation",
        image_url: "https://images.unsplash.com/photo-1634316888962-75074307f81c?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NTY2NzB8MHwxfHNlYXJjaHwyfHxiZWF1dGlmdWwlMjBtYW5pY3VyZWQlMjBiYWNreWFyZCUyMGdhcmRlbiUyMGxhbmRzY2FwZXxlbnwwfHx8fDE3NzE0ODMwMDB8MA&ixlib=rb-4.1.0&q=85",
        category: "Land Clearing",
    },
    GalleryItem {
        id: "3",
        title: "Storm Damage Cleanup",
        description: "Emergency response after major windstorm",
        image_url: "https://images.unsplash.com/photo-1596481768453-8befafc2d7ae?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NTY2NzB8MHwxfHNlYXJjaHwzfHxiZWF1dGlmdWwlMjBtYW5pY3VyZWQlMjBiYWNreWFyZCUyMGdhcmRlbiUyMGxhbmRzY2FwZXxlbnwwfHx8fDE3NzE0ODMwMDB8MA&ixlib=rb-4.1.0&q=85",
        category: "Emergency Services",
    },
    GalleryItem {
        id: "4",
        title: "Heritage Tree Pruning",
        description: "Expert pruning of 100-year-old maple",
        image_url: "https://images.unsplash.com/photo-1721217721953-14f4a916e018?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NTY2NzB8MHwxfHNlYXJjaHw0fHxiZWF1dGlmdWwlMjBtYW5pY3VyZWQlMjBiYWNreWFyZCUyMGdhcmRlbiUyMGxhbmRzY2FwZXxlbnwwfHx8fDE3NzE0ODMwMDB8MA&ixlib=rb-4.1.0&q=85",
        category: "Tree Trimming",
    },
];

/// Read-only catalog behind the content endpoints.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentCatalog;

impl ContentCatalog {
    pub fn services(&self) -> &'static [Service] {
        &SERVICES
    }

    pub fn testimonials(&self) -> &'static [Testimonial] {
        &TESTIMONIALS
    }

    pub fn gallery(&self) -> &'static [GalleryItem] {
        &GALLERY
    }
}
