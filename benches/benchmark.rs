//! rawjson benchmark

use bencher::{benchmark_group, benchmark_main, black_box, Bencher};
use rawjson::{
    parse, stringify, Decode, Encode, ObjectReader, ObjectWriter, ParseError, ParseResult, Sink,
};

struct Player {
    first_name: String,
    last_name: String,
    last_active: Vec<i32>,
    age: u8,
    is_verified: bool,
}

impl Encode for Player {
    fn encode(&self, sink: &mut Sink) {
        let mut obj = ObjectWriter::new(sink);
        obj.field("firstName", &self.first_name);
        obj.field("lastName", &self.last_name);
        obj.field("lastActive", &self.last_active);
        obj.field("age", &self.age);
        obj.field("isVerified", &self.is_verified);
        obj.finish();
    }
}

impl Decode for Player {
    fn decode(bytes: &[u8]) -> ParseResult<Self> {
        let mut first_name = None;
        let mut last_name = None;
        let mut last_active = None;
        let mut age = None;
        let mut is_verified = None;
        let mut fields = ObjectReader::new(bytes)?;
        while let Some((key, value)) = fields.next_field()? {
            match key {
                "firstName" => first_name = Some(String::decode(value)?),
                "lastName" => last_name = Some(String::decode(value)?),
                "lastActive" => last_active = Some(Vec::<i32>::decode(value)?),
                "age" => age = Some(u8::decode(value)?),
                "isVerified" => is_verified = Some(bool::decode(value)?),
                _ => {}
            }
        }
        Ok(Player {
            first_name: first_name.ok_or(ParseError::MissingField("firstName"))?,
            last_name: last_name.ok_or(ParseError::MissingField("lastName"))?,
            last_active: last_active.ok_or(ParseError::MissingField("lastActive"))?,
            age: age.ok_or(ParseError::MissingField("age"))?,
            is_verified: is_verified.ok_or(ParseError::MissingField("isVerified"))?,
        })
    }
}

fn player() -> Player {
    Player {
        first_name: String::from("Emmet"),
        last_name: String::from("West"),
        last_active: vec![8, 27, 2022],
        age: 23,
        is_verified: true,
    }
}

fn bench_encode_integer(bench: &mut Bencher) {
    let mut sink = Sink::with_capacity(1024);
    bench.iter(|| {
        sink.clear();
        black_box(9007199254740991i64).encode(&mut sink);
    })
}

fn bench_encode_float(bench: &mut Bencher) {
    let mut sink = Sink::with_capacity(1024);
    bench.iter(|| {
        sink.clear();
        black_box(3.141592653589793f64).encode(&mut sink);
    })
}

fn bench_encode_string(bench: &mut Bencher) {
    let mut sink = Sink::with_capacity(1024);
    let value = "a string with \"escapes\" and\nnewlines";
    bench.iter(|| {
        sink.clear();
        black_box(value).encode(&mut sink);
    })
}

fn bench_encode_array(bench: &mut Bencher) {
    let mut sink = Sink::with_capacity(1024);
    let values: Vec<i32> = (0..64).collect();
    bench.iter(|| {
        sink.clear();
        values.encode(&mut sink);
    })
}

fn bench_encode_struct(bench: &mut Bencher) {
    let player = player();
    bench.iter(|| black_box(stringify(&player)))
}

fn bench_decode_integer(bench: &mut Bencher) {
    bench.iter(|| black_box(parse::<i64>("9007199254740991").unwrap()))
}

fn bench_decode_string(bench: &mut Bencher) {
    let text = stringify("a string with \"escapes\" and\nnewlines");
    bench.iter(|| black_box(parse::<String>(&text).unwrap()))
}

fn bench_decode_array(bench: &mut Bencher) {
    let text = stringify(&(0..64).collect::<Vec<i32>>());
    bench.iter(|| black_box(parse::<Vec<i32>>(&text).unwrap()))
}

fn bench_decode_struct(bench: &mut Bencher) {
    let text = stringify(&player());
    bench.iter(|| black_box(parse::<Player>(&text).unwrap()))
}

benchmark_group!(
    rawjson_benches,
    bench_encode_integer,
    bench_encode_float,
    bench_encode_string,
    bench_encode_array,
    bench_encode_struct,
    bench_decode_integer,
    bench_decode_string,
    bench_decode_array,
    bench_decode_struct,
);

benchmark_main!(rawjson_benches);
