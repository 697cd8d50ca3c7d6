//! Fixture data mirroring the alquran.cloud response shapes.

use serde_json::{json, Value};

/// Al-Faatiha, vocalized.
pub const FATIHA_AYAHS: &[&str] = &[
    "بِسْمِ اللَّهِ الرَّحْمَنِ الرَّحِيمِ",
    "الْحَمْدُ لِلَّهِ رَبِّ الْعَالَمِينَ",
    "الرَّحْمَنِ الرَّحِيمِ",
    "مَالِكِ يَوْمِ الدِّينِ",
    "إِيَّاكَ نَعْبُدُ وَإِيَّاكَ نَسْتَعِينُ",
    "اهْدِنَا الصِّرَاطَ الْمُسْتَقِيمَ",
    "صِرَاطَ الَّذِينَ أَنْعَمْتَ عَلَيْهِمْ غَيْرِ الْمَغْضُوبِ عَلَيْهِمْ وَلَا الضَّالِّينَ",
];

/// Al-Ikhlaas, vocalized.
pub const IKHLAS_AYAHS: &[&str] = &[
    "قُلْ هُوَ اللَّهُ أَحَدٌ",
    "اللَّهُ الصَّمَدُ",
    "لَمْ يَلِدْ وَلَمْ يُولَدْ",
    "وَلَمْ يَكُنْ لَهُ كُفُوًا أَحَدٌ",
];

/// Envelope for `GET /surah`.
pub fn surah_list() -> Value {
    json!({
        "code": 200,
        "status": "OK",
        "data": [
            {
                "number": 1,
                "name": "سُورَةُ الْفَاتِحَةِ",
                "englishName": "Al-Faatiha",
                "englishNameTranslation": "The Opening",
                "numberOfAyahs": 7,
                "revelationType": "Meccan"
            },
            {
                "number": 112,
                "name": "سُورَةُ الْإِخْلَاصِ",
                "englishName": "Al-Ikhlaas",
                "englishNameTranslation": "Sincerity",
                "numberOfAyahs": 4,
                "revelationType": "Meccan"
            }
        ]
    })
}

/// Envelope for `GET /surah/{n}/{edition}`.
pub fn surah(number: u32) -> Value {
    match number {
        1 => surah_envelope(1, "سُورَةُ الْفَاتِحَةِ", "Al-Faatiha", FATIHA_AYAHS),
        112 => surah_envelope(112, "سُورَةُ الْإِخْلَاصِ", "Al-Ikhlaas", IKHLAS_AYAHS),
        _ => json!({
            "code": 404,
            "status": "NOT FOUND",
            "data": "Surah not found"
        }),
    }
}

/// Envelope for `GET /juz/{n}/{edition}`. Juz 1 carries Al-Faatiha with
/// embedded surah references, the way real juz responses do.
pub fn juz(number: u32) -> Value {
    match number {
        1 => {
            let ayahs: Vec<Value> = FATIHA_AYAHS
                .iter()
                .enumerate()
                .map(|(i, text)| {
                    json!({
                        "number": i + 1,
                        "text": text,
                        "numberInSurah": i + 1,
                        "surah": {
                            "number": 1,
                            "name": "سُورَةُ الْفَاتِحَةِ",
                            "englishName": "Al-Faatiha"
                        }
                    })
                })
                .collect();
            json!({
                "code": 200,
                "status": "OK",
                "data": { "number": 1, "ayahs": ayahs }
            })
        }
        _ => json!({
            "code": 404,
            "status": "NOT FOUND",
            "data": "Juz not found"
        }),
    }
}

fn surah_envelope(number: u32, name: &str, english_name: &str, verses: &[&str]) -> Value {
    let ayahs: Vec<Value> = verses
        .iter()
        .enumerate()
        .map(|(i, text)| {
            json!({
                "number": i + 1,
                "text": text,
                "numberInSurah": i + 1
            })
        })
        .collect();
    json!({
        "code": 200,
        "status": "OK",
        "data": {
            "number": number,
            "name": name,
            "englishName": english_name,
            "englishNameTranslation": "",
            "ayahs": ayahs
        }
    })
}
