use super::*;

fn items(n: usize) -> Vec<GalleryItem> {
    (0..n)
        .map(|i| GalleryItem {
            src: format!("/assets/cut{i}.jpg"),
            alt: format!("sample {i}"),
        })
        .collect()
}

#[test]
fn gallery_figures_empty_list_renders_nothing() {
    assert!(gallery_figures(&items(0)).is_empty());
}

#[test]
fn gallery_figures_single_item() {
    let figures = gallery_figures(&items(1));
    assert_eq!(figures, vec![("/assets/cut0.jpg".to_owned(), "sample 0".to_owned())]);
}

#[test]
fn gallery_figures_one_per_item_in_order() {
    for n in [3, 10] {
        let figures = gallery_figures(&items(n));
        assert_eq!(figures.len(), n);
        for (i, (src, alt)) in figures.iter().enumerate() {
            assert_eq!(src, &format!("/assets/cut{i}.jpg"));
            assert_eq!(alt, &format!("sample {i}"));
        }
    }
}
