// The built-in corpus: a dozen well-known artworks with hand-written
// features. Order matters: it is the corpus insertion order, which is the
// tie-break order for equal similarity scores.

use super::models::{ArtworkRecord, Year};

struct Entry {
    title: &'static str,
    artist: &'static str,
    year: &'static str,
    movement: &'static str,
    style: &'static str,
    technique: &'static str,
    colors: &'static [&'static str],
    subjects: &'static [&'static str],
    mood: &'static str,
    description: &'static str,
    story: &'static str,
    image_url: &'static str,
    museum: &'static str,
}

impl Entry {
    fn to_record(&self) -> ArtworkRecord {
        ArtworkRecord {
            title: self.title.to_string(),
            artist: self.artist.to_string(),
            year: Year::parse(self.year),
            movement: self.movement.to_string(),
            style: self.style.to_string(),
            technique: self.technique.to_string(),
            colors: self.colors.iter().map(|s| s.to_string()).collect(),
            subjects: self.subjects.iter().map(|s| s.to_string()).collect(),
            mood: self.mood.to_string(),
            description: self.description.to_string(),
            story: self.story.to_string(),
            image_url: self.image_url.to_string(),
            museum: self.museum.to_string(),
        }
    }
}

const ENTRIES: &[Entry] = &[
    Entry {
        title: "Mona Lisa",
        artist: "Leonardo da Vinci",
        year: "1503-1519",
        movement: "Renaissance",
        style: "Oil on poplar",
        technique: "sfumato",
        colors: &["brown", "green", "blue"],
        subjects: &["portrait", "woman", "landscape"],
        mood: "enigmatic",
        description: "Famous portrait of a woman with mysterious smile",
        story: "A mysterious woman with an enigmatic smile sits before a hazy imaginary landscape, painted with soft sfumato transitions",
        image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/e/ec/Mona_Lisa%2C_by_Leonardo_da_Vinci%2C_from_C2RMF_retouched.jpg/1280px-Mona_Lisa%2C_by_Leonardo_da_Vinci%2C_from_C2RMF_retouched.jpg",
        museum: "Louvre, Paris",
    },
    Entry {
        title: "The Last Supper",
        artist: "Leonardo da Vinci",
        year: "1495-1498",
        movement: "Renaissance",
        style: "Tempera on gesso",
        technique: "mural",
        colors: &["brown", "blue", "white"],
        subjects: &["religion", "figures", "architecture"],
        mood: "dramatic",
        description: "Mural of Jesus and his disciples at the last meal",
        story: "Jesus and his disciples gather at the last meal as he announces that one of them will betray him, each figure reacting in turn",
        image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/4/4b/%C3%9Altima_Cena_-_Da_Vinci_5.jpg/1280px-%C3%9Altima_Cena_-_Da_Vinci_5.jpg",
        museum: "Santa Maria delle Grazie, Milan",
    },
    Entry {
        title: "The Birth of Venus",
        artist: "Sandro Botticelli",
        year: "1485-1486",
        movement: "Renaissance",
        style: "Tempera on canvas",
        technique: "tempera",
        colors: &["blue", "green", "gold"],
        subjects: &["mythology", "woman", "sea"],
        mood: "serene",
        description: "Mythological painting of the goddess Venus arriving at the shore",
        story: "The goddess Venus rises from the sea on a shell and is blown ashore by the winds while a nymph waits with a cloak",
        image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/0/0b/Sandro_Botticelli_-_La_nascita_di_Venere_-_Google_Art_Project_-_edited.jpg/1280px-Sandro_Botticelli_-_La_nascita_di_Venere_-_Google_Art_Project_-_edited.jpg",
        museum: "Uffizi Gallery, Florence",
    },
    Entry {
        title: "The Night Watch",
        artist: "Rembrandt van Rijn",
        year: "1642",
        movement: "Baroque",
        style: "Oil on canvas",
        technique: "chiaroscuro",
        colors: &["brown", "gold", "black"],
        subjects: &["militia", "figures", "portrait"],
        mood: "dramatic",
        description: "Group portrait of a city militia company setting out",
        story: "A civic militia company led by its captain steps out of shadow into light, a crowded group portrait full of movement",
        image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/5/5a/The_Night_Watch_-_HD.jpg/1280px-The_Night_Watch_-_HD.jpg",
        museum: "Rijksmuseum, Amsterdam",
    },
    Entry {
        title: "Water Lilies",
        artist: "Claude Monet",
        year: "1906",
        movement: "Impressionism",
        style: "Oil on canvas",
        technique: "broken color",
        colors: &["blue", "green", "pink"],
        subjects: &["flowers", "nature", "water"],
        mood: "calm",
        description: "Water lilies floating on the pond at Giverny",
        story: "Water lilies drift on the surface of the garden pond at Giverny, reflections of sky and willows dissolving into light",
        image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/a/aa/Claude_Monet_-_Water_Lilies_-_1906%2C_Ryerson.jpg/1280px-Claude_Monet_-_Water_Lilies_-_1906%2C_Ryerson.jpg",
        museum: "Art Institute of Chicago",
    },
    Entry {
        title: "Sunflowers",
        artist: "Vincent van Gogh",
        year: "1888",
        movement: "Post-impressionism",
        style: "Oil on canvas",
        technique: "impasto",
        colors: &["yellow", "brown", "green"],
        subjects: &["flowers", "nature", "still life"],
        mood: "vibrant",
        description: "A series of still life paintings of sunflowers in a vase",
        story: "Bright yellow sunflowers in a vase, painted in thick strokes to decorate the house in Arles",
        image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/4/46/Vincent_Willem_van_Gogh_127.jpg/1280px-Vincent_Willem_van_Gogh_127.jpg",
        museum: "National Gallery, London",
    },
    Entry {
        title: "Cafe Terrace at Night",
        artist: "Vincent van Gogh",
        year: "1888",
        movement: "Post-impressionism",
        style: "Oil on canvas",
        technique: "impasto",
        colors: &["blue", "yellow", "orange"],
        subjects: &["night", "cafe", "urban"],
        mood: "mysterious",
        description: "Night scene of a cafe terrace with warm lighting",
        story: "A cafe terrace glows under a gas lamp on a starry night street in Arles, warm yellow against deep blue",
        image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/8/82/Vincent_van_Gogh_-_Cafe_Terrace_at_Night_%28Yorck%29.jpg/1280px-Vincent_van_Gogh_-_Cafe_Terrace_at_Night_%28Yorck%29.jpg",
        museum: "Kröller-Müller Museum, Otterlo",
    },
    Entry {
        title: "Starry Night",
        artist: "Vincent van Gogh",
        year: "1889",
        movement: "Post-impressionism",
        style: "Oil on canvas",
        technique: "impasto",
        colors: &["blue", "yellow", "black"],
        subjects: &["night", "sky", "village"],
        mood: "turbulent",
        description: "Swirling night sky over a quiet village",
        story: "A swirling night sky full of stars turns above a sleeping village, with a cypress rising like a flame",
        image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/e/ea/Van_Gogh_-_Starry_Night_-_Google_Art_Project.jpg/1280px-Van_Gogh_-_Starry_Night_-_Google_Art_Project.jpg",
        museum: "Museum of Modern Art, New York",
    },
    Entry {
        title: "The Scream",
        artist: "Edvard Munch",
        year: "1893",
        movement: "Expressionism",
        style: "Oil, tempera and pastel on cardboard",
        technique: "expressionist",
        colors: &["red", "orange", "blue"],
        subjects: &["anxiety", "emotion", "figure"],
        mood: "anxious",
        description: "Expressionist painting depicting existential anxiety",
        story: "A figure on a bridge clutches its face beneath a blood red sky, an image of existential anxiety",
        image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/c/c5/Edvard_Munch%2C_1893%2C_The_Scream%2C_oil%2C_tempera_and_pastel_on_cardboard%2C_91_x_73_cm%2C_National_Gallery_of_Norway.jpg/1280px-Edvard_Munch%2C_1893%2C_The_Scream%2C_oil%2C_tempera_and_pastel_on_cardboard%2C_91_x_73_cm%2C_National_Gallery_of_Norway.jpg",
        museum: "National Gallery of Norway, Oslo",
    },
    Entry {
        title: "Les Demoiselles d'Avignon",
        artist: "Pablo Picasso",
        year: "1907",
        movement: "Cubism",
        style: "Oil on canvas",
        technique: "cubist",
        colors: &["pink", "blue", "brown"],
        subjects: &["figures", "woman", "nude"],
        mood: "confrontational",
        description: "Five nude figures rendered in fractured angular planes",
        story: "Five women stare out from fractured angular planes, their faces drawn from masks, breaking with single point perspective",
        image_url: "https://upload.wikimedia.org/wikipedia/en/4/4c/Les_Demoiselles_d%27Avignon.jpg",
        museum: "Museum of Modern Art, New York",
    },
    Entry {
        title: "Guernica",
        artist: "Pablo Picasso",
        year: "1937",
        movement: "Cubism",
        style: "Oil on canvas",
        technique: "cubist",
        colors: &["black", "white", "gray"],
        subjects: &["war", "suffering", "political"],
        mood: "tragic",
        description: "Powerful anti-war painting depicting the horrors of war",
        story: "Anti-war painting depicting the horrors of war after the bombing of a Basque town, figures and animals torn by violence",
        image_url: "https://upload.wikimedia.org/wikipedia/en/7/74/PicassoGuernica.jpg",
        museum: "Museo Reina Sofía, Madrid",
    },
    Entry {
        title: "The Persistence of Memory",
        artist: "Salvador Dalí",
        year: "1931",
        movement: "Surrealism",
        style: "Oil on canvas",
        technique: "surrealist",
        colors: &["brown", "blue", "yellow"],
        subjects: &["time", "dreams", "surreal"],
        mood: "dreamlike",
        description: "Surrealist painting with melting clocks in a dreamlike landscape",
        story: "Soft melting clocks drape over branches and ledges in a silent dreamlike landscape, time itself losing its shape",
        image_url: "https://upload.wikimedia.org/wikipedia/en/d/dd/The_Persistence_of_Memory.jpg",
        museum: "Museum of Modern Art, New York",
    },
];

/// Build the built-in artwork records in corpus order.
pub fn records() -> Vec<ArtworkRecord> {
    ENTRIES.iter().map(Entry::to_record).collect()
}
