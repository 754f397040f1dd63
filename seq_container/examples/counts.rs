use seq_container::prelude::*;

fn main() {
    let mut d_arr = DynArray::<i32>::new();
    let mut c_arr = FixedArray::<i32, 12>::new();

    for i in 0..200 {
        println!("{i})");

        let ok_a = d_arr.push(i);
        let ok_b = c_arr.push(i);

        println!("d) count={} capacity={} {}", d_arr.len(), d_arr.capacity(), ok_a as i32);
        println!("c) count={} capacity={} {}", c_arr.len(), c_arr.capacity(), ok_b as i32);
    }

    for (index, value) in d_arr.iter() {
        println!("{index} => {value}");
    }

    for (index, value) in c_arr.iter() {
        println!("{index} => {value}");
    }

    d_arr.destroy();
    c_arr.destroy();

    println!("end!");
}
