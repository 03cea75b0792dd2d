use super::*;

fn photo(id: u32) -> Photo {
    Photo {
        id,
        category: "Western".to_owned(),
        alt: format!("wedding {id}"),
        couple: "A & B".to_owned(),
        year: "2024".to_owned(),
        image: format!("photo-{id}.jpg"),
    }
}

#[test]
fn strip_takes_the_first_six_photos() {
    let photos: Vec<Photo> = (1..=8).map(photo).collect();
    let strip = instagram_strip(&photos);
    let ids: Vec<u32> = strip.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn strip_handles_short_catalogs() {
    let photos: Vec<Photo> = (1..=2).map(photo).collect();
    assert_eq!(instagram_strip(&photos).len(), 2);
    assert!(instagram_strip(&[]).is_empty());
}
