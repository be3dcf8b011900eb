pub const BOOKS: &[&str] = &[
    "The Alchemist",
    "Kafka on the Shore",
    "One Hundred Years of Solitude",
    "Norwegian Wood",
    "The Little Prince",
    "Pride and Prejudice",
    "The Midnight Library",
    "Dune",
    "The Name of the Wind",
    "A Man Called Ove",
    "Educated",
    "Project Hail Mary",
];

pub const SHOWS: &[&str] = &[
    "Dark",
    "Money Heist",
    "Squid Game",
    "The Office",
    "Friends",
    "Stranger Things",
    "Breaking Bad",
    "The Crown",
    "Lupin",
    "Avatar: The Last Airbender",
    "Sherlock",
    "One Piece",
];

pub const HOBBIES: &[&str] = &[
    "Photography",
    "Cooking",
    "Hiking",
    "Gaming",
    "Painting",
    "Dancing",
    "Gardening",
    "Cycling",
    "Writing",
    "Chess",
    "Karaoke",
    "Yoga",
];
