use crate::dataset::{Flower, RawFlower};

pub fn flower(name: &str) -> Flower {
    RawFlower {
        common_name: name.to_owned(),
        scientific_name: format!("{} latin", name),
        family_name: "Example family".to_owned(),
        category: "Urt".to_owned(),
        status: "FUNNET".to_owned(),
        image_candidates: vec![format!("http://x/{}.jpg", name)],
        ..Default::default()
    }
    .into()
}

pub fn flower_without_image(name: &str) -> Flower {
    RawFlower {
        status: "IKKE_FUNNET".to_owned(),
        ..raw(name)
    }
    .into()
}

fn raw(name: &str) -> RawFlower {
    RawFlower {
        common_name: name.to_owned(),
        image_candidates: vec![format!("http://x/{}.jpg", name)],
        ..Default::default()
    }
}

pub fn flowers(count: usize) -> Vec<Flower> {
    (0..count).map(|i| flower(&format!("flower-{}", i))).collect()
}
