#[cfg(test)]
mod tests {
    use coco2voc::{
        extract_dataset, validate_dataset, Annotation, BoundingBox, KittiRecord,
        KittiToVocConverter, LabelConverter,
    };
    use std::fs::{self, File};
    use std::io::Write;
    use std::path::Path;

    const SAMPLE_ROW: &str =
        "Car 0.00 0 -1.57 599.41 156.40 629.75 189.25 2.0 1.8 4.2 1.5 1.6 10.0 1.57";

    fn write_rgb_image(path: &Path, width: u32, height: u32) {
        let img = image::RgbImage::new(width, height);
        img.save(path).unwrap();
    }

    fn write_gray_image(path: &Path, width: u32, height: u32) {
        let img = image::GrayImage::new(width, height);
        img.save(path).unwrap();
    }

    fn write_file(path: &Path, content: &str) {
        let mut file = File::create(path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
    }

    fn sample_coco_json() -> String {
        r#"{
            "images": [
                {"id": 1, "file_name": "img1.jpg", "width": 640, "height": 480},
                {"id": 2, "file_name": "img2.jpg", "width": 640, "height": 480},
                {"id": 3, "file_name": "img3.jpg", "width": 640, "height": 480}
            ],
            "annotations": [
                {"id": 10, "image_id": 1, "category_id": 1, "bbox": [5.0, 6.0, 7.5, 8.0], "area": 60.0, "iscrowd": 0},
                {"id": 11, "image_id": 1, "category_id": 2, "bbox": [1.0, 2.0, 3.0, 4.0], "area": 12.0, "iscrowd": 0},
                {"id": 12, "image_id": 2, "category_id": 2, "bbox": [10.0, 10.0, 10.0, 10.0], "area": 100.0, "iscrowd": 0}
            ],
            "categories": [
                {"id": 1, "name": "person", "supercategory": "none"},
                {"id": 2, "name": "dog", "supercategory": "none"}
            ]
        }"#
        .to_string()
    }

    #[test]
    fn test_kitti_record_parse() {
        let record = KittiRecord::parse(SAMPLE_ROW).unwrap();

        assert_eq!(record.kind, "Car");
        assert_eq!(record.truncated, "0.00");
        assert_eq!(record.occluded, "0");
        assert_eq!(record.alpha, "-1.57");
        assert_eq!(record.bbox_left, "599.41");
        assert_eq!(record.bbox_top, "156.40");
        assert_eq!(record.bbox_right, "629.75");
        assert_eq!(record.bbox_bottom, "189.25");
        assert_eq!(record.dim_height, "2.0");
        assert_eq!(record.dim_width, "1.8");
        assert_eq!(record.dim_length, "4.2");
        assert_eq!(record.loc_x, "1.5");
        assert_eq!(record.loc_y, "1.6");
        assert_eq!(record.loc_z, "10.0");
        assert_eq!(record.rotation_y, "1.57");
    }

    #[test]
    fn test_kitti_record_parse_ignores_score_column() {
        let row = format!("{} 0.98", SAMPLE_ROW);
        let record = KittiRecord::parse(&row).unwrap();
        assert_eq!(record.rotation_y, "1.57");
    }

    #[test]
    fn test_kitti_record_parse_rejects_short_row() {
        let err = KittiRecord::parse("Car 0.00 0 -1.57").unwrap_err();
        assert!(err.contains("expected 15 fields"));
        assert!(err.contains("got 4"));
    }

    #[test]
    fn test_kitti_record_display_roundtrip() {
        let record = KittiRecord::parse(SAMPLE_ROW).unwrap();
        assert_eq!(record.to_string(), SAMPLE_ROW);
    }

    #[test]
    fn test_bounding_box_from_xywh() {
        let bbox = BoundingBox::from_xywh([5.0, 6.0, 7.5, 8.0]);
        assert_eq!(bbox.left, 5.0);
        assert_eq!(bbox.top, 6.0);
        assert_eq!(bbox.right, 12.5);
        assert_eq!(bbox.bottom, 14.0);
    }

    #[test]
    fn test_annotation_to_kitti_record() {
        let annotation = Annotation {
            category: "traffic light".to_string(),
            bbox: BoundingBox::from_xywh([5.0, 6.0, 7.5, 8.0]),
            ..Annotation::default()
        };

        let record = KittiRecord::from(&annotation);
        assert_eq!(
            record.to_string(),
            "trafficlight 0 0 0 5 6 12.5 14 0 0 0 0 0 0 0"
        );
    }

    #[test]
    fn test_extract_dataset_unfiltered() {
        let temp_dir = tempfile::tempdir().unwrap();
        let ann_file = temp_dir.path().join("instances.json");
        write_file(&ann_file, &sample_coco_json());
        let label_dir = temp_dir.path().join("labels");

        let written = extract_dataset(&ann_file, &[], &label_dir).unwrap();
        assert_eq!(written, 2);

        let img1 = fs::read_to_string(label_dir.join("img1.txt")).unwrap();
        assert_eq!(
            img1,
            "person 0 0 0 5 6 12.5 14 0 0 0 0 0 0 0\ndog 0 0 0 1 2 4 6 0 0 0 0 0 0 0\n"
        );
        let img2 = fs::read_to_string(label_dir.join("img2.txt")).unwrap();
        assert_eq!(img2, "dog 0 0 0 10 10 20 20 0 0 0 0 0 0 0\n");

        // img3 has no annotations at all, so no label file
        assert!(!label_dir.join("img3.txt").exists());
    }

    #[test]
    fn test_extract_dataset_with_category_filter() {
        let temp_dir = tempfile::tempdir().unwrap();
        let ann_file = temp_dir.path().join("instances.json");
        write_file(&ann_file, &sample_coco_json());
        let label_dir = temp_dir.path().join("labels");

        let written =
            extract_dataset(&ann_file, &["person".to_string()], &label_dir).unwrap();
        assert_eq!(written, 1);

        let img1 = fs::read_to_string(label_dir.join("img1.txt")).unwrap();
        assert_eq!(img1, "person 0 0 0 5 6 12.5 14 0 0 0 0 0 0 0\n");

        // img2's only annotation is filtered out, so no label file
        assert!(!label_dir.join("img2.txt").exists());
    }

    #[test]
    fn test_extract_dataset_clears_stale_labels() {
        let temp_dir = tempfile::tempdir().unwrap();
        let ann_file = temp_dir.path().join("instances.json");
        write_file(&ann_file, &sample_coco_json());

        let label_dir = temp_dir.path().join("labels");
        fs::create_dir_all(&label_dir).unwrap();
        write_file(&label_dir.join("stale.txt"), "Car 0 0 0 1 1 2 2 0 0 0 0 0 0 0\n");

        extract_dataset(&ann_file, &[], &label_dir).unwrap();
        assert!(!label_dir.join("stale.txt").exists());
        assert!(label_dir.join("img1.txt").exists());
    }

    #[test]
    fn test_validate_dataset_matching_stems() {
        let temp_dir = tempfile::tempdir().unwrap();
        let image_dir = temp_dir.path().join("images");
        let label_dir = temp_dir.path().join("labels");
        fs::create_dir_all(&image_dir).unwrap();
        fs::create_dir_all(&label_dir).unwrap();
        write_rgb_image(&image_dir.join("a.png"), 2, 2);
        write_rgb_image(&image_dir.join("b.png"), 2, 2);
        write_file(&label_dir.join("a.txt"), "");
        write_file(&label_dir.join("b.txt"), "");

        let label_files = validate_dataset(&image_dir, &label_dir).unwrap();
        assert_eq!(
            label_files,
            vec![Path::new("a.txt").to_path_buf(), Path::new("b.txt").to_path_buf()]
        );
    }

    #[test]
    fn test_validate_dataset_rejects_unlabeled_image() {
        let temp_dir = tempfile::tempdir().unwrap();
        let image_dir = temp_dir.path().join("images");
        let label_dir = temp_dir.path().join("labels");
        fs::create_dir_all(&image_dir).unwrap();
        fs::create_dir_all(&label_dir).unwrap();
        write_rgb_image(&image_dir.join("a.png"), 2, 2);
        write_rgb_image(&image_dir.join("b.png"), 2, 2);
        write_file(&label_dir.join("a.txt"), "");

        let err = validate_dataset(&image_dir, &label_dir).unwrap_err();
        assert!(err.to_string().contains("images with no label file"));
        assert!(err.to_string().contains("b"));
    }

    #[test]
    fn test_validate_dataset_rejects_orphaned_label() {
        let temp_dir = tempfile::tempdir().unwrap();
        let image_dir = temp_dir.path().join("images");
        let label_dir = temp_dir.path().join("labels");
        fs::create_dir_all(&image_dir).unwrap();
        fs::create_dir_all(&label_dir).unwrap();
        write_rgb_image(&image_dir.join("a.png"), 2, 2);
        write_file(&label_dir.join("a.txt"), "");
        write_file(&label_dir.join("b.txt"), "");

        let err = validate_dataset(&image_dir, &label_dir).unwrap_err();
        assert!(err.to_string().contains("labels with no image"));
        assert!(err.to_string().contains("b"));
    }

    #[test]
    fn test_validate_dataset_rejects_repeated_stems() {
        let temp_dir = tempfile::tempdir().unwrap();
        let image_dir = temp_dir.path().join("images");
        let label_dir = temp_dir.path().join("labels");
        fs::create_dir_all(&image_dir).unwrap();
        fs::create_dir_all(&label_dir).unwrap();
        write_rgb_image(&image_dir.join("a.png"), 2, 2);
        write_file(&label_dir.join("a.txt"), "");
        write_file(&label_dir.join("a.text"), "");

        let err = validate_dataset(&image_dir, &label_dir).unwrap_err();
        assert!(err.to_string().contains("repeated label files"));
    }

    #[test]
    fn test_convert_dataset() {
        let temp_dir = tempfile::tempdir().unwrap();
        let image_dir = temp_dir.path().join("images");
        let label_dir = temp_dir.path().join("labels");
        let output_dir = temp_dir.path().join("voc");
        fs::create_dir_all(&image_dir).unwrap();
        fs::create_dir_all(&label_dir).unwrap();
        fs::create_dir_all(&output_dir).unwrap();

        write_rgb_image(&image_dir.join("a.png"), 4, 3);
        write_rgb_image(&image_dir.join("b.png"), 4, 3);
        write_file(&label_dir.join("a.txt"), &format!("{}\n", SAMPLE_ROW));
        write_file(&label_dir.join("b.txt"), "");

        let converter = KittiToVocConverter::new(&image_dir, &label_dir, &output_dir)
            .unwrap()
            .with_image_ext("png");
        let converted = converter.convert_dataset().unwrap();
        assert_eq!(converted, 2);

        let xml = fs::read_to_string(output_dir.join("a.xml")).unwrap();
        assert!(xml.starts_with("<annotation>"));
        assert!(xml.contains("<filename>a.png</filename>"));
        assert!(xml.contains("<database>KITTI</database>"));
        assert!(xml.contains("<size><width>4</width><height>3</height><depth>3</depth></size>"));
        // All 15 row tokens come through verbatim, except the lower-cased name
        assert!(xml.contains(
            "<object><name>car</name><truncated>0.00</truncated><occluded>0</occluded>\
             <alpha>-1.57</alpha>\
             <bndbox><xmin>599.41</xmin><ymin>156.40</ymin><xmax>629.75</xmax><ymax>189.25</ymax></bndbox>\
             <dimensions><height>2.0</height><width>1.8</width><length>4.2</length></dimensions>\
             <location><x>1.5</x><y>1.6</y><z>10.0</z></location>\
             <rotation_y>1.57</rotation_y></object>"
        ));

        // An empty label file still produces a header-only document
        let empty_xml = fs::read_to_string(output_dir.join("b.xml")).unwrap();
        assert!(empty_xml.contains("<filename>b.png</filename>"));
        assert!(!empty_xml.contains("<object>"));
    }

    #[test]
    fn test_convert_dataset_aborts_before_output_on_mismatch() {
        let temp_dir = tempfile::tempdir().unwrap();
        let image_dir = temp_dir.path().join("images");
        let label_dir = temp_dir.path().join("labels");
        let output_dir = temp_dir.path().join("voc");
        fs::create_dir_all(&image_dir).unwrap();
        fs::create_dir_all(&label_dir).unwrap();
        fs::create_dir_all(&output_dir).unwrap();

        write_rgb_image(&image_dir.join("a.png"), 4, 3);
        write_rgb_image(&image_dir.join("c.png"), 4, 3);
        write_file(&label_dir.join("a.txt"), &format!("{}\n", SAMPLE_ROW));

        let converter = KittiToVocConverter::new(&image_dir, &label_dir, &output_dir)
            .unwrap()
            .with_image_ext("png");
        assert!(converter.convert_dataset().is_err());

        // Validation failed, so nothing was written
        assert_eq!(fs::read_dir(&output_dir).unwrap().count(), 0);
    }

    #[test]
    fn test_convert_dataset_rejects_non_rgb_image() {
        let temp_dir = tempfile::tempdir().unwrap();
        let image_dir = temp_dir.path().join("images");
        let label_dir = temp_dir.path().join("labels");
        let output_dir = temp_dir.path().join("voc");
        fs::create_dir_all(&image_dir).unwrap();
        fs::create_dir_all(&label_dir).unwrap();
        fs::create_dir_all(&output_dir).unwrap();

        write_gray_image(&image_dir.join("a.png"), 4, 3);
        write_file(&label_dir.join("a.txt"), &format!("{}\n", SAMPLE_ROW));

        let converter = KittiToVocConverter::new(&image_dir, &label_dir, &output_dir)
            .unwrap()
            .with_image_ext("png");
        let err = converter.convert_dataset().unwrap_err();
        assert!(err.to_string().contains("is not RGB"));
    }

    #[test]
    fn test_converter_requires_existing_directories() {
        let temp_dir = tempfile::tempdir().unwrap();
        let image_dir = temp_dir.path().join("images");
        let label_dir = temp_dir.path().join("labels");
        let output_dir = temp_dir.path().join("voc");
        fs::create_dir_all(&image_dir).unwrap();
        fs::create_dir_all(&label_dir).unwrap();

        let err = KittiToVocConverter::new(&image_dir, &label_dir, &output_dir).unwrap_err();
        assert!(err.to_string().contains("output label folder"));
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_read_image_size() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("img.png");
        write_rgb_image(&path, 7, 5);

        let size = coco2voc::utils::read_image_size(&path).unwrap();
        assert_eq!((size.width, size.height, size.depth), (7, 5, 3));
    }

    #[test]
    fn test_kitti_record_garbage_tokens_pass_through() {
        // Token values are never validated, only counted
        let row = "Car abc xyz -9.99 bad1 bad2 bad3 bad4 0 0 0 0 0 0 nonsense";
        let record = KittiRecord::parse(row).unwrap();
        assert_eq!(record.truncated, "abc");
        assert_eq!(record.bbox_left, "bad1");
        assert_eq!(record.rotation_y, "nonsense");
    }
}
