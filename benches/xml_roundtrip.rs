//! Codec round-trip benchmark.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use labelrust::io::{XmlLabelCreator, XmlLabelParser};
use labelrust::model::{
    BarcodeObject, BoxObject, Model, ObjectType, TextNode, TextObject,
};
use labelrust::types::{Color, ColorNode, Distance, Matrix};
use std::path::Path;

fn build_model() -> Model {
    let mut model = Model::new();
    for i in 0..25 {
        let mut object = BoxObject::new();
        object.common.x0 = Distance::pt(i as f64 * 4.0);
        object.common.y0 = Distance::pt(i as f64 * 3.0);
        object.common.w = Distance::pt(40.0);
        object.common.h = Distance::pt(20.0);
        object.common.matrix = Matrix::rotation(i as f64);
        object.fill_color = ColorNode::from_color(Color::from_rgb(i as u8 * 10, 0, 200));
        model.add_object(ObjectType::Box(object));

        let mut text = TextObject::new();
        text.text = format!("Label {}\n${{name}}", i);
        model.add_object(ObjectType::Text(text));

        let mut barcode = BarcodeObject::new();
        barcode.bc_data = TextNode::literal("123456789");
        barcode.update_size();
        model.add_object(ObjectType::Barcode(barcode));
    }
    model
}

fn bench_roundtrip(c: &mut Criterion) {
    let model = build_model();
    let buffer = XmlLabelCreator::serialize(&model).unwrap();

    c.bench_function("serialize 75 objects", |b| {
        b.iter(|| XmlLabelCreator::serialize(black_box(&model)).unwrap())
    });

    c.bench_function("parse 75 objects", |b| {
        b.iter(|| XmlLabelParser::parse_buffer(black_box(&buffer), Path::new(".")).unwrap())
    });
}

criterion_group!(benches, bench_roundtrip);
criterion_main!(benches);
